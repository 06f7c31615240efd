use anyhow::{bail, Context, Result};
use gapic_metadata::loader;
use gapic_metadata::schema::{ClientVariant, GapicMetadata};
use gapic_metadata::validate::validate;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // Init logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    };
    match command.as_str() {
        "validate" => cmd_validate(&args[1..]),
        "resolve" => cmd_resolve(&args[1..]),
        "list" => cmd_list(&args[1..]),
        "dump" => cmd_dump(&args[1..]),
        "help" | "--help" | "-h" => {
            println!("{}", USAGE);
            Ok(())
        }
        other => bail!("unknown command '{}'\n{}", other, USAGE),
    }
}

const USAGE: &str = "\
gapic-metadata: inspect GAPIC client metadata tables

Usage:
  gapic-metadata validate <file>...
  gapic-metadata resolve <file> <service> <variant> <rpc>
  gapic-metadata list <file> [service]
  gapic-metadata dump <file>

A <file> of '-' resolves to the bundled Spanner DatabaseAdmin table.
Variants: grpc, grpc-async, rest";

fn load(path: &str) -> Result<GapicMetadata> {
    if path == "-" {
        return Ok(gapic_metadata::catalog::database_admin().clone());
    }
    loader::from_path(path).with_context(|| format!("loading {}", path))
}

fn cmd_validate(args: &[String]) -> Result<()> {
    if args.is_empty() {
        bail!("validate: expected at least one file\n{}", USAGE);
    }
    for path in args {
        let meta = if path.as_str() == "-" {
            gapic_metadata::catalog::database_admin().clone()
        } else {
            loader::load_unchecked(path).with_context(|| format!("loading {}", path))?
        };
        validate(&meta).with_context(|| format!("{}: validation failed", path))?;
        let services = meta.service_names().join(", ");
        info!(target: "gapic_metadata", "{}: ok ({}: {})", path, meta.library_package, services);
        println!("{}: ok", path);
    }
    Ok(())
}

fn cmd_resolve(args: &[String]) -> Result<()> {
    let [path, service, variant, rpc] = args else {
        bail!("resolve: expected <file> <service> <variant> <rpc>\n{}", USAGE);
    };
    let meta = load(path)?;
    let variant: ClientVariant = variant.parse()?;
    let method = meta.resolve(service, variant, rpc)?;
    println!("{}", method);
    Ok(())
}

fn cmd_list(args: &[String]) -> Result<()> {
    let Some(path) = args.first() else {
        bail!("list: expected <file> [service]\n{}", USAGE);
    };
    let meta = load(path)?;
    let services: Vec<&str> = match args.get(1) {
        Some(s) => vec![s.as_str()],
        None => meta.service_names(),
    };
    for service in services {
        for variant in meta.variants(service)? {
            let client = meta.library_client(service, variant)?;
            println!("{} [{}] -> {}", service, variant, client);
            for rpc in meta.rpc_names(service, variant)? {
                println!("  {} -> {}", rpc, meta.resolve(service, variant, rpc)?);
            }
        }
    }
    Ok(())
}

fn cmd_dump(args: &[String]) -> Result<()> {
    let Some(path) = args.first() else {
        bail!("dump: expected <file>\n{}", USAGE);
    };
    let meta = load(path)?;
    println!("{}", loader::to_json_string(&meta)?);
    Ok(())
}
