use clap::Parser;
use std::path::PathBuf;
use win_java::cli::{Cli, Commands};

#[test]
fn test_parse_java_home_explicit() {
    let cli = Cli::try_parse_from(["win-java", "java-home", r"C:\Program Files\Java\jre8"]).unwrap();

    match cli.command {
        Commands::JavaHome(args) => {
            assert_eq!(args.name.as_deref(), Some(r"C:\Program Files\Java\jre8"));
            assert!(!args.set_to_current_version);
        }
        other => panic!("Wrong command: {other:?}"),
    }
    assert!(!cli.json);
}

#[test]
fn test_parse_java_home_current_version_without_name() {
    let cli = Cli::try_parse_from(["win-java", "java-home", "--set-to-current-version"]).unwrap();

    match cli.command {
        Commands::JavaHome(args) => {
            assert!(args.name.is_none());
            assert!(args.set_to_current_version);
        }
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_java_home_requires_name_or_flag() {
    assert!(Cli::try_parse_from(["win-java", "java-home"]).is_err());
}

#[test]
fn test_parse_ca_install() {
    let cli = Cli::try_parse_from([
        "win-java",
        "ca-install",
        "corp_root",
        "--certificate",
        r"C:\certs\corp_root.crt",
        "--java-home",
        r"C:\jre8",
        "--keystore",
        r"D:\trust.jks",
        "--storepass",
        "super_secret",
        "--json",
    ])
    .unwrap();

    assert!(cli.json);
    match cli.command {
        Commands::CaInstall(args) => {
            assert_eq!(args.alias, "corp_root");
            assert_eq!(args.certificate, r"C:\certs\corp_root.crt");
            assert_eq!(args.java_home.as_deref(), Some(r"C:\jre8"));
            assert_eq!(args.keystore.as_deref(), Some(r"D:\trust.jks"));
            assert_eq!(args.storepass.as_deref(), Some("super_secret"));
        }
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_ca_install_requires_certificate() {
    assert!(Cli::try_parse_from(["win-java", "ca-install", "corp_root"]).is_err());
}

#[test]
fn test_parse_apply_with_config() {
    let cli = Cli::try_parse_from([
        "win-java",
        "--config",
        "site.yaml",
        "apply",
        "states/java.yaml",
    ])
    .unwrap();

    assert_eq!(cli.config, Some(PathBuf::from("site.yaml")));
    match cli.command {
        Commands::Apply(args) => assert_eq!(args.file, PathBuf::from("states/java.yaml")),
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_parse_resolve() {
    let cli = Cli::try_parse_from(["win-java", "resolve", "-j"]).unwrap();
    assert!(matches!(cli.command, Commands::Resolve(_)));
    assert!(cli.json);
}
