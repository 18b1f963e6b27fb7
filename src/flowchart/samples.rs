//! Built-in example documents, served to clients as starting points.

use serde::Serialize;

/// A named example document.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Sample {
    pub name: &'static str,
    pub documentation: &'static str,
}

pub const BASIC: &str = "START: User Checkout Process
STEP: Verify inventory
IF: Item is in stock?
  YES: STEP: Process payment
  NO: STEP: Notify out of stock
STEP: Ship item
END: Process Completed";

pub const ADVANCED: &str = "START: Advanced E-Commerce System
INPUT: User enters product search
DATABASE: Query product database
DECISION: Products found?
  YES: OUTPUT: Display search results
  NO: OUTPUT: Show no results message
PROCESS: User selects product
SUBPROCESS: Calculate pricing and tax
DATABASE: Update cart in database
IF: User ready to checkout?
  YES: STEP: Proceed to payment
  NO: STEP: Continue shopping
PARALLEL START: Process order
PARALLEL PATH: Send confirmation email
PARALLEL PATH: Update inventory system
PARALLEL PATH: Process payment gateway
PARALLEL END: All tasks completed
GROUP START: Order Fulfillment
STEP: Pick items from warehouse
STEP: Package and label items
STEP: Arrange courier pickup
GROUP END
OUTPUT: Shipping notification sent
COMMENT: Track order status in real-time
END: Order Complete";

pub const ENTERPRISE: &str = "START: Enterprise Data Pipeline
INPUT: Receive data from multiple sources
GROUP START: Data Validation
STEP: Check data format
STEP: Validate schema
DECISION: Data valid?
  YES: PROCESS: Continue processing
  NO: OUTPUT: Send error report
GROUP END
DATABASE: Store raw data
SUBPROCESS: Transform and clean data
PARALLEL START: Data Processing
PARALLEL PATH: Run analytics
PARALLEL PATH: Generate reports
PARALLEL PATH: Update dashboards
PARALLEL END: Processing complete
DATABASE: Store processed data
OUTPUT: Notify stakeholders
COMMENT: Schedule next pipeline run
END: Pipeline Completed";

pub const PROFESSIONAL: &str = "START: Software Deployment System
MANUAL INPUT: Developer submits code
DOCUMENT: Generate deployment docs
PREPARATION: Setup deployment environment
SUBPROCESS: Run pre-deployment checks
DECISION: All tests passed?
  YES: PROCESS: Continue deployment
  NO: STEP: Rollback changes
GROUP START: Deployment Phase
PARALLEL START: Multi-region deployment
PARALLEL PATH: Deploy to US servers
PARALLEL PATH: Deploy to EU servers
PARALLEL PATH: Deploy to ASIA servers
PARALLEL END: Deployment complete
GROUP END
DATABASE: Update deployment logs
STORED DATA: Archive release artifacts
DELAY: Wait for health checks
DISPLAY: Show deployment status
DECISION: Health check passed?
  YES: CONNECTOR: Success
  NO: MANUAL LOOP: Manual intervention
MERGE: Combine results
OUTPUT: Send notification emails
MULTIPLE DOCUMENTS: Generate reports
SUBROUTINE: Cleanup temporary files
COMMENT: Monitor for 24 hours
OFF PAGE: Continue to monitoring
END: Deployment Complete";

pub const SAMPLES: &[Sample] = &[
    Sample { name: "basic", documentation: BASIC },
    Sample { name: "advanced", documentation: ADVANCED },
    Sample { name: "enterprise", documentation: ENTERPRISE },
    Sample { name: "professional", documentation: PROFESSIONAL },
];
