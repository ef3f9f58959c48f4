//! `arcdash` - maintenance CLI for the Arc benefits dashboard

use anyhow::Context;
use arcdash_workbook::siteconfig::{self, DEFAULT_CONFIG_PATH};
use arcdash_workbook::{fix_workbook, PatchMode, SiteConfig};
use clap::{Arg, ArgAction, Command, value_parser};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Command::new("arcdash")
        .version(arcdash_workbook::VERSION)
        .about("Maintenance tools for the Arc benefits dashboard")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("fix-workbook")
                .about("Migrate workbook visibility rules and tab parameters")
                .arg(
                    Arg::new("path")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Path to the workbook JSON file"),
                )
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .action(ArgAction::SetTrue)
                        .help("Report changes without writing the file"),
                ),
        )
        .subcommand(
            Command::new("generate-config")
                .about("Generate the web app config.js from environment variables")
                .arg(
                    Arg::new("out")
                        .long("out")
                        .default_value(DEFAULT_CONFIG_PATH)
                        .value_parser(value_parser!(PathBuf))
                        .help("Output path for the generated artifact"),
                ),
        );

    match cli.get_matches().subcommand() {
        Some(("fix-workbook", args)) => {
            let path = args.get_one::<PathBuf>("path").unwrap();
            let dry_run = args.get_flag("dry-run");
            let mode = if dry_run {
                PatchMode::DryRun
            } else {
                PatchMode::Apply
            };

            let report = fix_workbook(path, mode)
                .with_context(|| format!("failed to patch workbook {}", path.display()))?;

            if dry_run {
                println!(
                    "dry run: {} visibility nodes to migrate, {} tab parameters to rewrite",
                    report.migrated_nodes, report.parameters_rewritten
                );
            } else {
                println!("✓ Fixed all ArcTab conditional visibilities");
                println!("✓ Updated tab parameters to reset on ResourceType change");
            }
        }
        Some(("generate-config", args)) => {
            let out = args.get_one::<PathBuf>("out").unwrap();
            let config = SiteConfig::from_env();
            config
                .write_to(out)
                .with_context(|| format!("failed to write {}", out.display()))?;

            println!("✓ Generated {} with:", out.display());
            println!("  CLIENT_ID: {}", siteconfig::masked(&config.client_id));
            println!("  TENANT_ID: {}", siteconfig::masked(&config.tenant_id));
        }
        _ => unreachable!("subcommand required"),
    }

    Ok(())
}
