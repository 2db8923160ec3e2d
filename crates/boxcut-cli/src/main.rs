//! boxcut CLI - flat box net generator
//!
//! Takes the internal dimensions of a box and writes a cutting layout with
//! cut and fold lines distinguished. Dimensions not given on the command line
//! are asked for interactively.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use boxcut_export::export_drawing;
use boxcut_layout::{assign_roles, layout, BoxSpec, Drawing};
use boxcut_units::parse_mm;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

mod config;
mod prompt;

use config::{with_output_extension, BoxcutConfig};
use prompt::Prompter;

#[derive(Parser)]
#[command(name = "boxcut")]
#[command(about = "Generate a laser-cuttable box net from internal dimensions", long_about = None)]
struct Cli {
    /// Three internal dimensions (width, length, height), e.g. 50mm 5cm 2in
    #[arg(num_args = 0..=3)]
    dimensions: Vec<String>,

    /// Material thickness [default: 3mm]
    #[arg(short, long)]
    thickness: Option<String>,

    /// Closure flap length [default: 15mm]
    #[arg(short, long)]
    flap_length: Option<String>,

    /// Output file, .svg or .dxf [default: box.svg]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Assign width/length/height by size (smallest first) instead of entry order
    #[arg(long)]
    sort: bool,

    /// Read defaults from a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the drawing as JSON instead of writing a file
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    // Keep stdout pure JSON when --json is set.
    if cli.json {
        run(&cli, &mut Prompter::new(stdin.lock(), io::stderr()), &mut stdout)
    } else {
        run(&cli, &mut Prompter::new(stdin.lock(), io::stdout()), &mut stdout)
    }
}

/// Resolve the box, lay it out, then write the file or print JSON to `stdout`.
fn run<R: BufRead, W: Write>(
    cli: &Cli,
    prompter: &mut Prompter<R, W>,
    stdout: &mut impl Write,
) -> Result<()> {
    let file_config = match &cli.config {
        Some(path) => BoxcutConfig::load(path)?,
        None => BoxcutConfig::default(),
    };

    let (spec, output) = if cli.dimensions.len() == 3 {
        resolve_from_args(cli, file_config)?
    } else {
        run_prompts(prompter, &cli.dimensions, file_config, cli)?
    };

    debug!(?spec, "Resolved box");
    let drawing = layout(&spec)?;

    if cli.json {
        serde_json::to_writer_pretty(&mut *stdout, &drawing)?;
        writeln!(stdout)?;
        return Ok(());
    }

    print_spec(prompter, &spec)?;
    export_drawing(&drawing, &output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    print_summary(prompter, &drawing, &output)?;

    Ok(())
}

/// Build the box from three positional dimensions, the config file and flags.
fn resolve_from_args(cli: &Cli, config: BoxcutConfig) -> Result<(BoxSpec, PathBuf)> {
    let [width, length, height] = cli.dimensions.as_slice() else {
        bail!("expected three dimensions, got {}", cli.dimensions.len());
    };
    let config = config.with_overrides(
        cli.thickness.clone(),
        cli.flap_length.clone(),
        cli.output.clone(),
        cli.sort,
    );
    let spec = BoxSpec::parse(
        [width.as_str(), length.as_str(), height.as_str()],
        &config.thickness,
        &config.flap_length,
        config.roles(),
    )?;
    Ok((spec, with_output_extension(&config.output.to_string_lossy())))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();
}

/// Ask for whatever the command line left out. Dimensions given as arguments
/// are kept and only the missing ones are asked for.
fn run_prompts<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    given: &[String],
    config: BoxcutConfig,
    cli: &Cli,
) -> Result<(BoxSpec, PathBuf)> {
    prompter.say("Box Net Generator")?;
    prompter.say("=".repeat(60))?;
    prompter.say("Note: Enter the INTERNAL dimensions of your desired box")?;
    prompter.say("You can use 'mm', 'cm', or 'in' units (default is mm if no unit specified)")?;
    prompter.say("-".repeat(60))?;

    let labels = [
        "Enter first dimension (e.g., 50mm, 5cm, 2in): ",
        "Enter second dimension: ",
        "Enter third dimension: ",
    ];
    let mut mm = [0.0; 3];
    for (i, label) in labels.iter().enumerate() {
        mm[i] = match given.get(i) {
            Some(raw) => parse_mm(raw)?,
            None => prompter.ask_until_valid(label, None, parse_mm)?,
        };
    }

    let thickness = match &cli.thickness {
        Some(raw) => parse_mm(raw)?,
        None => prompter.ask_until_valid(
            &format!("\nEnter material thickness (default: {}): ", config.thickness),
            Some(config.thickness.as_str()),
            parse_mm,
        )?,
    };
    let flap_length = match &cli.flap_length {
        Some(raw) => parse_mm(raw)?,
        None => prompter.ask_until_valid(
            &format!("\nEnter flap length (default: {}): ", config.flap_length),
            Some(config.flap_length.as_str()),
            parse_mm,
        )?,
    };
    let output = match &cli.output {
        Some(path) => with_output_extension(&path.to_string_lossy()),
        None if cli.json => config.output.clone(),
        None => {
            let default = config.output.to_string_lossy().into_owned();
            let answer = prompter.ask(&format!("\nEnter filename (default: {default}): "))?;
            with_output_extension(if answer.is_empty() { &default } else { &answer })
        }
    };

    let roles = config.with_overrides(None, None, None, cli.sort).roles();
    let (width, length, height) = assign_roles(mm, roles);
    let spec = BoxSpec {
        width,
        length,
        height,
        thickness,
        flap_length,
    };
    spec.validate()?;
    Ok((spec, output))
}

fn print_spec<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>, spec: &BoxSpec) -> Result<()> {
    prompter.say("\nBox dimensions (internal):")?;
    prompter.say(format_args!("  Width: {:.1}mm", spec.width))?;
    prompter.say(format_args!("  Length: {:.1}mm", spec.length))?;
    prompter.say(format_args!("  Height: {:.1}mm", spec.height))?;
    prompter.say(format_args!("Material thickness: {:.1}mm", spec.thickness))?;
    prompter.say(format_args!("Flap length: {:.1}mm", spec.flap_length))?;
    Ok(())
}

fn print_summary<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    drawing: &Drawing,
    output: &std::path::Path,
) -> Result<()> {
    prompter.say(format_args!(
        "\nFile '{}' has been created successfully.",
        output.display()
    ))?;
    prompter.say(format_args!(
        "Total dimensions: {:.1}mm × {:.1}mm",
        drawing.total_width(),
        drawing.total_height()
    ))?;
    prompter.say(format_args!(
        "Cut length: {:.1}mm, fold length: {:.1}mm",
        drawing.cut_length(),
        drawing.fold_length()
    ))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Cursor;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("boxcut").chain(args.iter().copied())).unwrap()
    }

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_rejects_four_dimensions() {
        assert!(Cli::try_parse_from(["boxcut", "1", "2", "3", "4"]).is_err());
    }

    #[test]
    fn test_prompts_fill_missing_values() {
        let args = cli(&[]);
        let mut p = prompter("50\nbad\n75\n100\n\n20mm\nmybox\n");
        let (spec, output) =
            run_prompts(&mut p, &args.dimensions, BoxcutConfig::default(), &args).unwrap();
        assert_eq!(spec, BoxSpec::new(50.0, 75.0, 100.0).with_flap_length(20.0));
        assert_eq!(output, PathBuf::from("mybox.svg"));
    }

    #[test]
    fn test_prompts_keep_given_dimensions() {
        let args = cli(&["5cm", "-t", "2", "--sort"]);
        let mut p = prompter("100\n75\n\nout.dxf\n");
        let (spec, output) =
            run_prompts(&mut p, &args.dimensions, BoxcutConfig::default(), &args).unwrap();
        assert_eq!(
            spec,
            BoxSpec::new(50.0, 75.0, 100.0).with_thickness(2.0)
        );
        assert_eq!(output, PathBuf::from("out.dxf"));
    }

    #[test]
    fn test_prompts_reject_degenerate() {
        let args = cli(&["100", "100", "50", "-t", "40", "-o", "x.svg"]);
        // all three dimensions given, but route through prompts for the flap
        let mut p = prompter("\n");
        assert!(run_prompts(&mut p, &args.dimensions, BoxcutConfig::default(), &args).is_err());
    }

    #[test]
    fn test_args_take_flags_over_config() {
        let args = cli(&["100", "50", "75", "-t", "2mm", "-o", "tray"]);
        let config = BoxcutConfig::from_toml_str(
            "thickness = \"4mm\"\nflap_length = \"1cm\"\noutput = \"file.dxf\"\nsort = true\n",
        )
        .unwrap();
        let (spec, output) = resolve_from_args(&args, config).unwrap();
        assert_eq!(
            spec,
            BoxSpec::new(50.0, 75.0, 100.0)
                .with_thickness(2.0)
                .with_flap_length(10.0)
        );
        assert_eq!(output, PathBuf::from("tray.svg"));
    }

    #[test]
    fn test_args_fall_back_to_config() {
        let args = cli(&["100", "50", "75"]);
        let config = BoxcutConfig::from_toml_str("thickness = \"4mm\"\noutput = \"file.dxf\"\n")
            .unwrap();
        let (spec, output) = resolve_from_args(&args, config).unwrap();
        assert_eq!(spec, BoxSpec::new(100.0, 50.0, 75.0).with_thickness(4.0));
        assert_eq!(output, PathBuf::from("file.dxf"));
    }

    #[test]
    fn test_args_reject_degenerate() {
        let args = cli(&["100", "100", "50", "-t", "40"]);
        assert!(resolve_from_args(&args, BoxcutConfig::default()).is_err());
    }

    #[test]
    fn test_json_keeps_prompts_off_stdout() {
        let args = cli(&["--json"]);
        let mut p = prompter("50\n75\n100\n\n\n");
        let mut stdout = Vec::new();
        run(&args, &mut p, &mut stdout).unwrap();

        let drawing: Drawing = serde_json::from_slice(&stdout).unwrap();
        assert_eq!(drawing.edges.len(), 33);
        let prompts = String::from_utf8(p.into_output()).unwrap();
        assert!(prompts.contains("Box Net Generator"));
        assert!(!String::from_utf8(stdout).unwrap().contains("Box Net Generator"));
    }

    #[test]
    fn test_summary_rounds_to_one_decimal() {
        let drawing = layout(&BoxSpec::new(50.0, 75.0, 100.0)).unwrap();
        let mut p = prompter("");
        print_summary(&mut p, &drawing, std::path::Path::new("box.svg")).unwrap();
        let shown = String::from_utf8(p.into_output()).unwrap();
        assert!(shown.contains("Total dimensions: 262.0mm × 302.0mm"));
    }
}
