mod attempts;
mod domain;
mod error;
mod formulas;
mod gameday;
mod plan;
mod plates;
mod server;
mod tables;
mod warmups;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};

use crate::attempts::project_attempts;
use crate::domain::{
    Attempt, AttemptSlot, DynamicWarmupSettings, Lift, ScoringFormula, WarmupPlan,
    WarmupStrategy, format_kg, parse_gender,
};
use crate::formulas::calculate_score;
use crate::plan::{CompetitionPlan, PlanSummary, lite_plan, load_plan};
use crate::plates::{DisplaySize, plates_for_display, resolve_plates};
use crate::warmups::generate_warmups;

/// Powerlifting meet planner: attempts, warm-ups, plate loading and scores.
#[derive(Parser, Debug)]
#[command(name = "liftplan")]
#[command(about = "Plan powerlifting attempts, warm-ups and bar loading")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project the missing attempts from an opener or a third attempt.
    Attempts {
        /// squat, bench or deadlift.
        lift: Lift,

        /// Planned 1st attempt in kg.
        #[arg(long, default_value = "")]
        opener: String,

        /// Planned 3rd attempt in kg (used when no opener is given).
        #[arg(long, default_value = "")]
        third: String,
    },

    /// Generate warm-up sets leading up to an opener.
    Warmups {
        /// squat, bench or deadlift.
        lift: Lift,

        /// Opener in kg.
        opener: String,

        /// default (table lookup) or dynamic.
        #[arg(long, default_value = "default")]
        strategy: WarmupStrategy,

        /// Number of sets for the dynamic strategy.
        #[arg(long, default_value = "6")]
        sets: String,

        /// First warm-up weight in kg for the dynamic strategy.
        #[arg(long, default_value = "20")]
        start: String,

        /// Last warm-up as a percentage of the opener for the dynamic strategy.
        #[arg(long, default_value = "92")]
        final_percent: String,

        /// Also show plates for each warm-up.
        #[arg(long)]
        plates: bool,

        /// Load a pair of 2.5 kg collars when showing plates.
        #[arg(long, requires = "plates")]
        collars: bool,
    },

    /// Show the plates to load on each side of the bar.
    Plates {
        /// Total bar weight in kg.
        total: f64,

        /// Load a pair of 2.5 kg collars.
        #[arg(long)]
        collars: bool,

        /// Plate drawing size: sm or lg.
        #[arg(long, default_value = "sm")]
        size: DisplaySize,
    },

    /// Score a total against bodyweight.
    Score {
        /// Total in kg.
        total: f64,

        /// Bodyweight in kg.
        bodyweight: f64,

        /// male or female.
        gender: String,

        /// ipfgl, wilks or dots.
        #[arg(long, default_value = "ipfgl")]
        formula: ScoringFormula,
    },

    /// Fill in a competition plan file and print its summary.
    Plan {
        /// Path to the plan (JSON).
        /// Can also be set via LIFTPLAN_PLAN environment variable.
        #[arg(value_name = "FILE", env = "LIFTPLAN_PLAN")]
        file: PathBuf,

        /// Print the filled-in plan as JSON instead of the summary.
        #[arg(long)]
        json: bool,

        /// Print the flat export record as CSV.
        #[arg(long, conflicts_with = "json")]
        export: bool,
    },

    /// Build a whole plan from nothing but the third attempts.
    Lite {
        /// Lifter name.
        name: String,

        #[arg(long, default_value = "")]
        squat: String,

        #[arg(long, default_value = "")]
        bench: String,

        #[arg(long, default_value = "")]
        deadlift: String,
    },

    /// Run the JSON HTTP API.
    Serve {
        /// Port number for the web server.
        /// Can also be set via LIFTPLAN_PORT environment variable.
        #[arg(long, env = "LIFTPLAN_PORT", default_value = "8080")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Command::Attempts {
            lift,
            opener,
            third,
        } => {
            let attempts = project_attempts(lift, &Attempt::new(&opener, "", &third))?;
            print_attempts(lift, &attempts);
        }
        Command::Warmups {
            lift,
            opener,
            strategy,
            sets,
            start,
            final_percent,
            plates,
            collars,
        } => {
            let settings = DynamicWarmupSettings::new(&sets, &start, &final_percent);
            let plan = generate_warmups(lift, &opener, strategy, &settings)?;
            print_warmups(lift, &plan, plates.then_some(collars));
        }
        Command::Plates {
            total,
            collars,
            size,
        } => print_plates(total, collars, size),
        Command::Score {
            total,
            bodyweight,
            gender,
            formula,
        } => {
            let gender = parse_gender(&gender)?;
            let score = calculate_score(total, bodyweight, gender, formula);
            println!("{}: {:.2}", formula, score);
        }
        Command::Plan { file, json, export } => {
            let mut plan = load_plan(&file)
                .with_context(|| format!("Failed to load plan from {}", file.display()))?;

            for (lift, e) in plan.fill_in() {
                println!("{}: {}", lift, e);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else if export {
                print_export(&plan)?;
            } else {
                print_summary(&plan.summary(Local::now().date_naive()));
            }
        }
        Command::Lite {
            name,
            squat,
            bench,
            deadlift,
        } => {
            let plan = lite_plan(
                &name,
                &[
                    (Lift::Squat, squat.as_str()),
                    (Lift::Bench, bench.as_str()),
                    (Lift::Deadlift, deadlift.as_str()),
                ],
            );
            print_summary(&plan.summary(Local::now().date_naive()));
        }
        Command::Serve { port } => {
            server::run_server(port).await?;
        }
    }

    Ok(())
}

// === Output ===

fn print_attempts(lift: Lift, attempts: &Attempt) {
    println!("=== {} ===", lift.display_name());
    for slot in AttemptSlot::all() {
        println!("Attempt {}: {:>7}kg", slot, attempts.get(*slot));
    }
}

fn print_warmups(lift: Lift, plan: &WarmupPlan, plates_with_collars: Option<bool>) {
    if plan.is_empty() {
        println!("No {} warm-ups for this opener", lift.display_name());
        return;
    }

    println!("=== {} warm-ups ({} sets) ===", lift.display_name(), plan.len());

    for (i, set) in plan.populated().enumerate() {
        print!("{:2}. {:>7}kg x {:2}", i + 1, set.weight, set.reps);
        if let Some(collars) = plates_with_collars
            && let Some(weight) = set.weight_kg()
        {
            print!("   {}", resolve_plates(weight, collars));
        }
        println!();
    }
}

fn print_plates(total: f64, collars: bool, size: DisplaySize) {
    let load = resolve_plates(total, collars);
    println!("{}", load);

    let plates = plates_for_display(total, collars, size);
    if plates.is_empty() {
        return;
    }

    println!();
    println!("Per side:");
    for plate in &plates {
        println!(
            "  {:>6}kg  {:7} {}x{}",
            format_kg(plate.weight),
            plate.style.color,
            plate.style.height,
            plate.style.width
        );
    }
    if let Some(loaded) = load.loaded_weight() {
        println!("Loaded: {}kg", format_kg(loaded));
    }
}

fn print_summary(summary: &PlanSummary) {
    println!();
    println!("=== Competition Plan ===");
    println!();

    if !summary.lifter_name.is_empty() {
        println!("Lifter: {}", summary.lifter_name);
    }
    if !summary.event_name.is_empty() {
        println!("Event:  {}", summary.event_name);
    }
    if let Some(days) = summary.days_out {
        println!("Days out: {}", days);
    }

    for lift in &summary.lifts {
        println!();
        println!("--- {} ---", lift.lift.display_name());
        println!(
            "Attempts: {} / {} / {}",
            lift.attempts.opener, lift.attempts.second, lift.attempts.third
        );

        if lift.warmups.is_empty() {
            println!("Warm-ups: none");
        } else {
            let sets: Vec<String> = lift
                .warmups
                .iter()
                .map(|set| format!("{}x{}", set.weight, set.reps))
                .collect();
            println!("Warm-ups: {}", sets.join(", "));
        }
        if lift.stale_warmups {
            println!("Warm-ups were generated for a different opener");
        }
        if let Some(plates) = &lift.plates {
            println!("{}", plates);
        }
        if !lift.complete {
            println!("(incomplete)");
        }
    }

    println!();
    println!("Predicted total: {}kg", format_kg(summary.predicted_total));
    println!("{}: {:.2}", summary.formula, summary.score);
}

fn print_export(plan: &CompetitionPlan) -> Result<()> {
    let stdout = io::stdout();
    plan.write_export_csv(stdout.lock()).context("Failed to write export record")?;
    Ok(())
}
