use super::*;
use clap::CommandFactory;

fn generate_args(args: &[&str]) -> (PathBuf, bool) {
    let cli = Cli::try_parse_from(args).unwrap();
    match cli.command {
        Some(Command::Generate { input, escape_quotes }) => (input, escape_quotes),
        other => panic!("expected generate, got {other:?}"),
    }
}

#[test]
fn no_subcommand_means_serve() {
    assert!(Cli::try_parse_from(["flowdoc"]).unwrap().command.is_none());
}

#[test]
fn generate_defaults_to_stdin_without_escaping() {
    assert_eq!(generate_args(&["flowdoc", "generate"]), (PathBuf::from("-"), false));
}

#[test]
fn escape_quotes_flag_is_accepted() {
    assert_eq!(generate_args(&["flowdoc", "generate", "doc.txt", "--escape-quotes"]), (PathBuf::from("doc.txt"), true));
}

#[test]
fn escape_quotes_flag_is_backed_by_env() {
    let arg = Cli::command()
        .find_subcommand("generate")
        .and_then(|cmd| cmd.get_arguments().find(|a| a.get_id() == "escape_quotes"))
        .map(|a| a.get_env().map(ToOwned::to_owned));
    assert_eq!(arg, Some(Some("FLOWDOC_ESCAPE_QUOTES".into())));
}
