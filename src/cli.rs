//! Command line front end: loads session files, runs the engine, prints results.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand, ValueHint};

use hiitlap::display::{
    classify_lap, format_goal_distance, format_goal_outcome, format_interval_row, format_km,
    format_lap_header, format_pace, format_time, PaceClass,
};
use hiitlap::export::{export_csv, export_csv_to_file};
use hiitlap::laps::{
    calculate, overview, speed_to_pace, summarize, Goal, Interval, IntervalField, LapTarget,
};
use hiitlap::storage::{
    get_config_path, load_config, load_session, save_config, save_session, Session,
};

const ANSI_RESET: &str = "\x1b[0m";

#[derive(Parser, Debug)]
#[command(author, version, about = "Treadmill HIIT lap pace calculator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a new session file from configured defaults
    Init(InitArgs),
    /// Calculate distances, paces and the goal point for a session
    Calc(CalcArgs),
    /// Edit one interval's duration or speed
    Set(SetArgs),
    /// Change the lap count or toggle base lap replication
    Laps(LapsArgs),
    /// Append a customized lap cloned from the base lap
    AddLap(SessionArg),
    /// Restore the default base lap and a single replicated lap
    Reset(SessionArg),
    /// Export the full lap table as CSV
    Export(ExportArgs),
    /// Show or write the configuration file
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
struct SessionArg {
    /// Session file
    #[arg(value_hint = ValueHint::FilePath)]
    session: PathBuf,
}

#[derive(Args, Debug)]
struct InitArgs {
    /// Where to write the session
    #[arg(short, long, default_value = "session.toml", value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// Overwrite an existing file
    #[arg(long, action = ArgAction::SetTrue)]
    force: bool,
}

#[derive(Args, Debug)]
struct CalcArgs {
    /// Session file
    #[arg(value_hint = ValueHint::FilePath)]
    session: PathBuf,

    /// Goal distance in km (overrides the session goal)
    #[arg(long, conflicts_with = "no_goal")]
    goal: Option<f64>,

    /// Ignore the session goal
    #[arg(long, action = ArgAction::SetTrue)]
    no_goal: bool,

    /// Print the report as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Disable pace colors
    #[arg(long, action = ArgAction::SetTrue)]
    no_color: bool,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("field").required(true).args(["duration", "speed"])))]
struct SetArgs {
    /// Session file
    #[arg(value_hint = ValueHint::FilePath)]
    session: PathBuf,

    /// Interval number (1-based)
    #[arg(short, long)]
    interval: usize,

    /// Lap number (1-based) to edit a customized lap instead of the base lap
    #[arg(short, long)]
    lap: Option<usize>,

    /// New duration in minutes
    #[arg(long)]
    duration: Option<f64>,

    /// New speed in km/h
    #[arg(long)]
    speed: Option<f64>,
}

#[derive(Args, Debug)]
struct LapsArgs {
    /// Session file
    #[arg(value_hint = ValueHint::FilePath)]
    session: PathBuf,

    /// Number of laps
    #[arg(short, long)]
    count: Option<usize>,

    /// Repeat the base lap for every lap
    #[arg(long, action = ArgAction::Set)]
    replicate: Option<bool>,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Session file
    #[arg(value_hint = ValueHint::FilePath)]
    session: PathBuf,

    /// Output CSV path (`-` for stdout, defaults to the configured file name)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Write the current configuration (defaults if none exists)
    #[arg(long, action = ArgAction::SetTrue)]
    write: bool,
}

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Init(args) => init(&args),
        Command::Calc(args) => calc(&args),
        Command::Set(args) => set(&args),
        Command::Laps(args) => laps(&args),
        Command::AddLap(args) => add_lap(&args.session),
        Command::Reset(args) => reset(&args.session),
        Command::Export(args) => export(&args),
        Command::Config(args) => config(&args),
    }
}

fn open_session(path: &Path) -> Result<Session> {
    load_session(path).with_context(|| format!("loading session {}", path.display()))
}

fn store_session(session: &mut Session, path: &Path) -> Result<()> {
    save_session(session, path).with_context(|| format!("saving session {}", path.display()))
}

fn init(args: &InitArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        );
    }
    let config = load_config().context("loading configuration")?;
    let mut session = Session::from_config(&config);
    store_session(&mut session, &args.output)?;
    println!("Wrote {}", args.output.display());
    Ok(())
}

fn paint(text: &str, class: Option<PaceClass>, color: bool) -> String {
    match class {
        Some(class) if color => format!("{}{}{}", class.color().ansi_fg(), text, ANSI_RESET),
        _ => text.to_string(),
    }
}

fn print_interval_table(title: &str, intervals: &[Interval], target: &str, color: bool) {
    let classes = classify_lap(intervals, target);
    let summary = summarize(intervals);

    println!("{}", title);
    for ((index, interval), class) in intervals.iter().enumerate().zip(classes) {
        let pace = format_pace(speed_to_pace(interval.speed));
        println!(
            "  {:>2}  {:>6} min  {:>6} km/h  {}  {}",
            index + 1,
            interval.duration,
            interval.speed,
            paint(&format!("{:>10}", pace), class, color),
            format_km(interval.distance_km())
        );
    }
    println!(
        "  Total {} — avg pace {}",
        format_km(summary.distance_km),
        format_pace(summary.avg_pace)
    );
}

fn calc(args: &CalcArgs) -> Result<()> {
    let session = open_session(&args.session)?;
    let goal = if args.no_goal {
        None
    } else if let Some(km) = args.goal {
        Some(Goal::distance(km))
    } else {
        Some(session.options.goal)
    };

    let report = calculate(&session.plan, goal);

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("serializing report")?;
        println!("{}", json);
        return Ok(());
    }

    let color = !args.no_color;
    let target = &session.options.target_pace;

    print_interval_table("Base lap", &session.plan.base, target, color);
    if !session.plan.replicate {
        for (lap, intervals) in session.plan.overrides.iter().enumerate() {
            println!();
            print_interval_table(&format!("Lap {}", lap + 1), intervals, target, color);
        }
    }

    let all_laps = overview(&session.plan);
    println!();
    println!("Overview ({} laps)", session.plan.effective_lap_count());
    println!("  Distance: {}", format_km(all_laps.distance_km));
    println!("  Time:     {}", format_time(all_laps.minutes));
    println!("  Avg pace: {}", format_pace(all_laps.avg_pace));
    println!("  Goal:     {}", format_goal_distance(goal.as_ref()));

    println!();
    for lap in &report.laps {
        println!("{}", format_lap_header(lap));
        for row in &lap.rows {
            println!("  {}", format_interval_row(row));
        }
    }

    println!();
    println!("Total distance: {}", format_km(report.total.distance_km));
    println!("Total time:     {}", format_time(report.total.minutes));
    println!("Goal reached:   {}", format_goal_outcome(&report.goal));
    Ok(())
}

fn set(args: &SetArgs) -> Result<()> {
    let mut session = open_session(&args.session)?;
    if args.interval == 0 {
        bail!("interval numbers start at 1");
    }
    let index = args.interval - 1;
    let target = match args.lap {
        Some(0) => bail!("lap numbers start at 1"),
        Some(lap) => LapTarget::Override(lap - 1),
        None => LapTarget::Base,
    };

    let (field, value) = match (args.duration, args.speed) {
        (Some(duration), _) => (IntervalField::Duration, duration),
        (None, Some(speed)) => (IntervalField::Speed, speed),
        (None, None) => bail!("either --duration or --speed is required"),
    };

    let anchor_edited = session.plan.set_field(target, index, field, value)?;
    if session
        .options
        .auto_increment
        .after_speed_edit(&mut session.plan, anchor_edited)
    {
        println!("Re-derived base lap speeds from interval 1");
    }

    store_session(&mut session, &args.session)?;
    println!("Set interval {} {} to {}", args.interval, field, value);
    Ok(())
}

fn laps(args: &LapsArgs) -> Result<()> {
    let mut session = open_session(&args.session)?;
    if let Some(replicate) = args.replicate {
        session.plan.set_replicate(replicate);
    }
    if let Some(count) = args.count {
        session.plan.set_lap_count(count);
    }
    store_session(&mut session, &args.session)?;
    println!(
        "{} laps ({})",
        session.plan.lap_count,
        if session.plan.replicate {
            "replicating base lap"
        } else {
            "customized laps"
        }
    );
    Ok(())
}

fn add_lap(path: &Path) -> Result<()> {
    let mut session = open_session(path)?;
    let count = session.plan.add_lap()?;
    store_session(&mut session, path)?;
    println!("Now {} laps", count);
    Ok(())
}

fn reset(path: &Path) -> Result<()> {
    let config = load_config().context("loading configuration")?;
    let mut session = open_session(path)?;
    session.reset(&config);
    store_session(&mut session, path)?;
    println!("Reset {}", path.display());
    Ok(())
}

fn export(args: &ExportArgs) -> Result<()> {
    let session = open_session(&args.session)?;
    let output = match &args.output {
        Some(path) => path.clone(),
        None => PathBuf::from(load_config().context("loading configuration")?.export.file_name),
    };

    if output.as_os_str() == "-" {
        println!("{}", export_csv(&session.plan)?);
    } else {
        export_csv_to_file(&session.plan, &output)
            .with_context(|| format!("writing {}", output.display()))?;
        println!("Wrote {}", output.display());
    }
    Ok(())
}

fn config(args: &ConfigArgs) -> Result<()> {
    let config = load_config().context("loading configuration")?;
    if args.write {
        save_config(&config).context("saving configuration")?;
    }
    println!("{}", get_config_path().display());
    println!();
    print!(
        "{}",
        toml::to_string_pretty(&config).context("serializing configuration")?
    );
    Ok(())
}
