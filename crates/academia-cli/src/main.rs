use std::path::{Path, PathBuf};

use academia_cli::sample::{self, SampleConfig};
use academia_codec::Codec;
use academia_config::{CodecConfig, StoreConfig};
use academia_models::Student;
use academia_observability::init_logging;
use academia_store::{MemoryStore, RecordArchive};
use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use serde_json::Value as JsonValue;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "academia-cli")]
#[command(about = "Academia CLI - Generate, check and archive academic records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print generated students as tagged JSON
    Sample {
        /// Number of students to generate
        #[arg(short = 'c', long, default_value = "10")]
        count: usize,

        /// Number of teachers (one course each)
        #[arg(long, default_value = "4")]
        teachers: usize,

        /// Maximum grades per student
        #[arg(long, default_value = "3")]
        grades: usize,
    },
    /// Decode a student (or an array of students) from a JSON file
    Check {
        /// Path to the JSON file
        file: PathBuf,
    },
    /// Generate students, archive them and verify they load back unchanged
    Roundtrip {
        /// Number of students to generate
        #[arg(short = 'c', long, default_value = "100")]
        count: usize,
    },
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    let codec = Codec::standard().with_config(CodecConfig::from_env());

    match cli.command {
        Commands::Sample {
            count,
            teachers,
            grades,
        } => handle_sample(&codec, count, teachers, grades),
        Commands::Check { file } => handle_check(&codec, &file),
        Commands::Roundtrip { count } => handle_roundtrip(codec, count),
    }
}

fn handle_sample(codec: &Codec, count: usize, teachers: usize, grades: usize) -> anyhow::Result<()> {
    let config = SampleConfig::new(count)
        .with_teachers(teachers)
        .with_grades_per_student(grades);
    let set = sample::generate(&config).context("Failed to generate sample records")?;

    let encoder = codec.encoder();
    let students = set
        .students
        .iter()
        .map(|student| encoder.encode_entity(student))
        .collect::<Result<Vec<_>, _>>()?;

    let output = JsonValue::Array(students);
    let text = if codec.config().pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", text);
    Ok(())
}

fn handle_check(codec: &Codec, file: &Path) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let json: JsonValue = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;

    let documents = match json {
        JsonValue::Array(items) => items,
        single => vec![single],
    };

    let mut rejected = 0usize;
    for (idx, document) in documents.into_iter().enumerate() {
        match codec.decode_entity::<Student>(document) {
            Ok(student) => {
                println!(
                    "✅ {} ({}): age {}, GPA {:.1}",
                    student.name(),
                    student.student_id(),
                    student.age(),
                    student.gpa()
                );
            }
            Err(e) => {
                rejected += 1;
                warn!(index = idx, error = %e, "Rejected student record");
                eprintln!("❌ Record {}: {}", idx, e);
            }
        }
    }

    if rejected > 0 {
        eprintln!("\n❌ {} record(s) rejected", rejected);
        std::process::exit(1);
    }
    Ok(())
}

fn handle_roundtrip(codec: Codec, count: usize) -> anyhow::Result<()> {
    let set = sample::generate(&SampleConfig::new(count))
        .context("Failed to generate sample records")?;
    let archive = RecordArchive::new(MemoryStore::new(), codec, &StoreConfig::from_env());

    for course in &set.courses {
        archive.save(course)?;
    }
    for teacher in &set.teachers {
        archive.save(teacher)?;
    }
    for student in &set.students {
        archive.save(student)?;
    }
    info!(records = archive.store().len(), "Archived sample records");

    let mut mismatches = 0usize;
    for student in &set.students {
        match archive.load_student(student.student_id())? {
            Some(loaded) if loaded == *student => {}
            _ => {
                mismatches += 1;
                eprintln!("❌ Student {} did not round-trip", student.student_id());
            }
        }
    }

    let mut courses = archive.courses()?;
    courses.sort_by_key(|course| course.course_id());
    if courses != set.courses {
        mismatches += 1;
        eprintln!("❌ Course listing differs from the generated courses");
    }

    if mismatches > 0 {
        eprintln!("\n❌ {} mismatch(es)", mismatches);
        std::process::exit(1);
    }

    println!(
        "✅ {} students, {} teachers and {} courses round-tripped",
        set.students.len(),
        set.teachers.len(),
        set.courses.len()
    );
    Ok(())
}
