use std::path::PathBuf;

use clap::{error::ErrorKind, ArgAction, CommandFactory, Parser, ValueEnum};
use walkdir::WalkDir;

use crate::{
    config::{Config, IntoQuestionType, QuestionRendered, QuestionType},
    constants::{verbosity, STDIN_INDICATOR},
    dialoguer::{confirm, prompt_boolean, prompt_single_choice, prompt_text},
    error::{Error, Result},
    formatter::{PartialFormatter, TemplateFormatter},
    ignore::parse_seederignore_file,
    ioutils::{
        copy_file, create_dir_all, get_output_dir, get_template_dir,
        parse_string_to_json, read_from, write_file,
    },
    template::{operation::TemplateOperation, processor::TemplateProcessor},
};

#[derive(Debug, Clone, ValueEnum, Copy, PartialEq)]
#[value(rename_all = "lowercase")]
pub enum SkipConfirm {
    /// Skip all confirmation prompts
    All,
    /// Skip confirmation when overwriting existing files
    Overwrite,
}

/// Command-line arguments structure for seeder.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the template directory
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Directory where the generated project will be created
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Force overwrite of existing output directory
    #[arg(short, long)]
    pub force: bool,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Specifies answers to use during template processing.
    ///
    /// Accepts either a JSON string or "-" to read from stdin.
    ///
    /// The input should be a JSON object with key-value pairs where keys are
    /// question names from the template config and values are the
    /// corresponding answers. Questions answered here are not prompted for.
    ///
    /// Provide answers directly
    ///
    /// > seeder template_dir output_dir --answers='{"project_name": "demo"}'
    ///
    /// Read answers from stdin
    ///
    /// > echo '{"project_name": "demo"}' | seeder template_dir output_dir --answers=-
    ///
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Controls which confirmation prompts should be skipped during template
    /// processing. Multiple flags can be combined.
    ///
    /// > seeder --skip-confirms=all
    ///
    /// > seeder --skip-confirms=overwrite
    ///
    #[arg(long = "skip-confirms", value_delimiter = ',')]
    #[arg(value_enum)]
    pub skip_confirms: Vec<SkipConfirm>,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(crate::constants::exit_codes::FAILURE);
            } else {
                e.exit();
            }
        }
    }
}

/// Maps the `-v` occurrence count to a log level filter.
pub fn get_log_level_from_verbose(verbose: u8) -> log::LevelFilter {
    match verbose {
        verbosity::OFF => log::LevelFilter::Warn,
        verbosity::INFO => log::LevelFilter::Info,
        verbosity::DEBUG => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

pub fn run(args: Args) -> Result<()> {
    let engine: Box<dyn TemplateFormatter> = Box::new(PartialFormatter::new());

    let template_root = get_template_dir(&args.template)?;
    let output_root = get_output_dir(&args.output_dir, args.force)?;

    let config = Config::load_config(&template_root)?;

    // Retrieves answers from `--answers` or stdin
    let buf = if let Some(answers) = args.answers {
        Some(if answers == STDIN_INDICATOR {
            read_from(std::io::stdin())?
        } else {
            answers
        })
    } else {
        None
    };

    // Parses retrieved answers to JSON or starts from an empty map
    let mut answers = if let Some(buf) = buf {
        parse_string_to_json(buf)?
    } else {
        serde_json::Map::new()
    };

    for (key, question) in &config.questions {
        let QuestionRendered { default, help } =
            question.render(key, &answers, engine.as_ref());

        // Pre-answered questions are not asked again; the resolved default
        // already carries the supplied answer.
        let answer = if answers.contains_key(key) {
            default
        } else {
            match question.into_question_type() {
                QuestionType::SingleChoice => {
                    prompt_single_choice(question.choices.clone(), default, help)?
                }
                QuestionType::Boolean => prompt_boolean(default, help)?,
                QuestionType::Text => prompt_text(default, help)?,
            }
        };
        answers.insert(key.clone(), answer);
    }

    // Process ignore patterns
    let seederignore = parse_seederignore_file(&template_root)?;

    let processor = TemplateProcessor::new(
        engine.as_ref(),
        &template_root,
        &output_root,
        &answers,
        &seederignore,
    );

    // Process template files
    for dir_entry in WalkDir::new(&template_root) {
        let raw_entry = dir_entry.map_err(|e| Error::ProcessError {
            source_path: template_root.display().to_string(),
            e: e.to_string(),
        })?;
        let template_entry = raw_entry.path().to_path_buf();
        match processor.process(&template_entry) {
            Ok(file_operation) => {
                let user_confirmed_overwrite = match &file_operation {
                    TemplateOperation::Write { target, target_exists, .. }
                    | TemplateOperation::Copy { target, target_exists, .. } => {
                        let skip_prompt = args.skip_confirms.contains(&SkipConfirm::All)
                            || args.skip_confirms.contains(&SkipConfirm::Overwrite)
                            || !target_exists;
                        let user_confirmed = confirm(
                            skip_prompt,
                            format!("Overwrite {}?", target.display()),
                        )?;

                        if user_confirmed {
                            match &file_operation {
                                TemplateOperation::Copy { source, .. } => {
                                    copy_file(source.as_path(), target.as_path())?
                                }
                                TemplateOperation::Write { content, .. } => {
                                    write_file(content, target)?
                                }
                                _ => unreachable!(),
                            };
                        }
                        user_confirmed
                    }
                    TemplateOperation::CreateDirectory { target, target_exists } => {
                        if !target_exists {
                            create_dir_all(target)?;
                        }
                        true
                    }
                    TemplateOperation::Ignore { .. } => true,
                };

                let message = file_operation.get_message(user_confirmed_overwrite);
                log::info!("{}", message);
            }
            Err(e) => match e {
                Error::ProcessError { .. } => log::warn!("{}", e),
                _ => return Err(e),
            },
        }
    }

    println!("Project seeded successfully in {}.", output_root.display());
    Ok(())
}
