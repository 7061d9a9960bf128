use clap::Parser;

use super::*;

#[test]
fn languages_defaults() {
    let cli = Cli::try_parse_from(["line-tally", "languages"]).unwrap();
    let Commands::Languages(args) = cli.command else {
        panic!("expected languages");
    };
    assert_eq!(args.report.format, FormatChoice::Text);
    assert!(args.report.exclude.is_empty());
    assert!(args.ext.is_none());
    assert!(!args.report.no_report_file);
    assert_eq!(cli.verbose, 0);
    assert!(!cli.quiet);
}

#[test]
fn languages_with_root_and_extensions() {
    let cli = Cli::try_parse_from([
        "line-tally",
        "languages",
        "src",
        "--ext",
        "cs,py",
        "-x",
        "**/gen/**",
        "-x",
        "*.min.js",
    ])
    .unwrap();
    let Commands::Languages(args) = cli.command else {
        panic!("expected languages");
    };
    assert_eq!(args.report.root, PathBuf::from("src"));
    assert_eq!(args.ext, Some(vec!["cs".to_string(), "py".to_string()]));
    assert_eq!(args.report.exclude, vec!["**/gen/**", "*.min.js"]);
}

#[test]
fn detailed_defaults_to_csharp() {
    let cli = Cli::try_parse_from(["line-tally", "detailed", "repo"]).unwrap();
    let Commands::Detailed(args) = cli.command else {
        panic!("expected detailed");
    };
    assert_eq!(args.lang, "cs");
    assert!(args.top.is_none());
    assert_eq!(args.report.root, PathBuf::from("repo"));
}

#[test]
fn detailed_top_must_be_positive() {
    assert!(Cli::try_parse_from(["line-tally", "detailed", "--top", "0"]).is_err());
    let cli =
        Cli::try_parse_from(["line-tally", "detailed", "--top", "5", "--lang", "ts"]).unwrap();
    let Commands::Detailed(args) = cli.command else {
        panic!("expected detailed");
    };
    assert_eq!(args.top, Some(5));
    assert_eq!(args.lang, "ts");
}

#[test]
fn global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["line-tally", "languages", "-vv", "--no-config"]).unwrap();
    assert_eq!(cli.verbose, 2);
    assert!(cli.no_config);
}

#[test]
fn quiet_conflicts_with_verbose() {
    assert!(Cli::try_parse_from(["line-tally", "-q", "-v", "languages"]).is_err());
}

#[test]
fn output_conflicts_with_no_report_file() {
    let result = Cli::try_parse_from([
        "line-tally",
        "languages",
        "-o",
        "out.txt",
        "--no-report-file",
    ]);
    assert!(result.is_err());
}

#[test]
fn json_format_maps_to_output_format() {
    let cli = Cli::try_parse_from(["line-tally", "detailed", "--format", "json"]).unwrap();
    let Commands::Detailed(args) = cli.command else {
        panic!("expected detailed");
    };
    assert_eq!(OutputFormat::from(args.report.format), OutputFormat::Json);
}

#[test]
fn config_path_flag() {
    let cli =
        Cli::try_parse_from(["line-tally", "--config", "custom.toml", "languages"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
}

#[test]
fn cli_definition_is_valid() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
