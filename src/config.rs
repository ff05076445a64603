use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::constants::CONFIG_FILENAMES;
use crate::error::{Error, Result};
use crate::formatter::{parser, TemplateFormatter};

/// Type of question to be presented to the user
#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    /// String input question type
    Str,
    /// Boolean (yes/no) question type
    Bool,
}

/// Represents a single question in the configuration
#[derive(Debug, Deserialize)]
pub struct Question {
    /// Help text/prompt to display to the user
    #[serde(default)]
    pub help: String,
    /// Type of the question (string or boolean)
    #[serde(rename = "type")]
    pub r#type: Type,
    /// Optional default value for the question. String defaults may
    /// reference earlier answers as `{name}` placeholders.
    #[serde(default)]
    pub default: serde_json::Value,
    /// Available choices for string questions
    #[serde(default)]
    pub choices: Vec<String>,
}

/// Main configuration structure holding all questions
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub questions: IndexMap<String, Question>,
}

impl Config {
    /// Parses a single config file by its extension.
    fn from_file<P: AsRef<Path>>(path: P) -> Option<Result<Self>> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).ok()?;

        let parsed: std::result::Result<Self, String> =
            if path.extension().is_some_and(|ext| ext == "json") {
                serde_json::from_str(&contents).map_err(|e| e.to_string())
            } else {
                serde_yaml::from_str(&contents).map_err(|e| e.to_string())
            };

        Some(parsed.map_err(|e| Error::ConfigParseError {
            config_file: path.display().to_string(),
            e,
        }))
    }

    /// Loads the first configuration file found in the template root.
    ///
    /// # Arguments
    /// * `template_root` - Directory to search for config files
    ///
    /// # Returns
    /// * `Result<Config>` - The parsed and validated configuration
    pub fn load_config<P: AsRef<Path>>(template_root: P) -> Result<Config> {
        let template_root = template_root.as_ref();
        for config_file in CONFIG_FILENAMES.iter() {
            if let Some(config) = Config::from_file(template_root.join(config_file)) {
                let config = config?;
                config.validate()?;
                return Ok(config);
            }
        }
        Err(Error::ConfigNotFoundError {
            template_dir: template_root.display().to_string(),
            config_files: CONFIG_FILENAMES.join(", "),
        })
    }

    /// Checks that every question key can be used as a placeholder name.
    fn validate(&self) -> Result<()> {
        for key in self.questions.keys() {
            if !parser::is_valid_name(key) {
                return Err(Error::ValidationError(format!(
                    "question key '{key}' is not a valid placeholder name"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq)]
pub enum QuestionType {
    SingleChoice,
    Text,
    Boolean,
}

/// A question with its default and help text resolved against the answers
/// collected so far.
#[derive(Debug)]
pub struct QuestionRendered {
    pub default: serde_json::Value,
    pub help: String,
}

pub trait IntoQuestionType {
    #[allow(clippy::wrong_self_convention)]
    fn into_question_type(&self) -> QuestionType;
}

impl IntoQuestionType for Question {
    fn into_question_type(&self) -> QuestionType {
        match (&self.r#type, self.choices.is_empty()) {
            (Type::Str, false) => QuestionType::SingleChoice,
            (Type::Str, true) => QuestionType::Text,
            (Type::Bool, _) => QuestionType::Boolean,
        }
    }
}

impl Question {
    pub fn render(
        &self,
        question_key: &str,
        answers: &serde_json::Map<String, serde_json::Value>,
        engine: &dyn TemplateFormatter,
    ) -> QuestionRendered {
        // Renders default.
        let default = if let Some(answer) = answers.get(question_key) {
            // If answer in pre-filled answers we just return them as it is.
            answer.to_owned()
        } else {
            match self.into_question_type() {
                QuestionType::Boolean => {
                    serde_json::Value::Bool(self.default.as_bool().unwrap_or(false))
                }
                QuestionType::SingleChoice | QuestionType::Text => {
                    // String defaults may refer to earlier answers; unknown
                    // names stay as `{name}`.
                    let default_str = self.default.as_str().unwrap_or_default();
                    let default_rendered =
                        engine.format(default_str, answers).unwrap_or_default();
                    serde_json::Value::String(default_rendered)
                }
            }
        };

        // Sometimes "help" contains placeholders referring to earlier
        // answers; render it too.
        let help = engine.format(&self.help, answers).unwrap_or(self.help.clone());

        QuestionRendered { default, help }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::PartialFormatter;
    use serde_json::json;

    fn answers(
        pairs: &[(&str, serde_json::Value)],
    ) -> serde_json::Map<String, serde_json::Value> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn string_default_resolves_earlier_answers() {
        let question = Question {
            help: "Crate name for {project_name}".to_string(),
            r#type: Type::Str,
            default: json!("{project_name}-lib"),
            choices: vec![],
        };
        let engine = PartialFormatter::new();
        let answers = answers(&[("project_name", json!("demo"))]);

        let rendered = question.render("crate_name", &answers, &engine);
        assert_eq!(rendered.default, json!("demo-lib"));
        assert_eq!(rendered.help, "Crate name for demo");
    }

    #[test]
    fn string_default_keeps_unanswered_placeholders() {
        let question = Question {
            help: String::new(),
            r#type: Type::Str,
            default: json!("{project_name}-lib"),
            choices: vec![],
        };
        let engine = PartialFormatter::new();

        let rendered = question.render("crate_name", &serde_json::Map::new(), &engine);
        assert_eq!(rendered.default, json!("{project_name}-lib"));
    }

    #[test]
    fn prefilled_answer_wins_over_default() {
        let question = Question {
            help: String::new(),
            r#type: Type::Str,
            default: json!("fallback"),
            choices: vec![],
        };
        let engine = PartialFormatter::new();
        let answers = answers(&[("crate_name", json!("picked"))]);

        let rendered = question.render("crate_name", &answers, &engine);
        assert_eq!(rendered.default, json!("picked"));
    }

    #[test]
    fn boolean_default_falls_back_to_false() {
        let question = Question {
            help: String::new(),
            r#type: Type::Bool,
            default: serde_json::Value::Null,
            choices: vec![],
        };
        let engine = PartialFormatter::new();

        let rendered = question.render("use_tests", &serde_json::Map::new(), &engine);
        assert_eq!(rendered.default, json!(false));
    }

    #[test]
    fn question_type_derivation() {
        let text = Question {
            help: String::new(),
            r#type: Type::Str,
            default: serde_json::Value::Null,
            choices: vec![],
        };
        let choice = Question {
            help: String::new(),
            r#type: Type::Str,
            default: serde_json::Value::Null,
            choices: vec!["mit".to_string(), "apache".to_string()],
        };
        let boolean = Question {
            help: String::new(),
            r#type: Type::Bool,
            default: serde_json::Value::Null,
            choices: vec![],
        };
        assert_eq!(text.into_question_type(), QuestionType::Text);
        assert_eq!(choice.into_question_type(), QuestionType::SingleChoice);
        assert_eq!(boolean.into_question_type(), QuestionType::Boolean);
    }

    #[test]
    fn json_config_is_preferred_over_yaml() {
        let template_root = tempfile::tempdir().unwrap();
        std::fs::write(
            template_root.path().join("seeder.json"),
            r#"{"questions": {"from_json": {"type": "str"}}}"#,
        )
        .unwrap();
        std::fs::write(
            template_root.path().join("seeder.yaml"),
            "questions:\n  from_yaml:\n    type: str\n",
        )
        .unwrap();

        let config = Config::load_config(template_root.path()).unwrap();
        assert!(config.questions.contains_key("from_json"));
    }

    #[test]
    fn yaml_config_is_parsed() {
        let template_root = tempfile::tempdir().unwrap();
        std::fs::write(
            template_root.path().join("seeder.yaml"),
            "questions:\n  project_name:\n    type: str\n    help: Project name\n    default: demo\n",
        )
        .unwrap();

        let config = Config::load_config(template_root.path()).unwrap();
        let question = &config.questions["project_name"];
        assert_eq!(question.help, "Project name");
        assert_eq!(question.default, json!("demo"));
    }

    #[test]
    fn missing_config_is_an_error() {
        let template_root = tempfile::tempdir().unwrap();
        let result = Config::load_config(template_root.path());
        assert!(matches!(result, Err(Error::ConfigNotFoundError { .. })));
    }

    #[test]
    fn unparseable_config_is_an_error() {
        let template_root = tempfile::tempdir().unwrap();
        std::fs::write(template_root.path().join("seeder.json"), "{not json").unwrap();
        let result = Config::load_config(template_root.path());
        assert!(matches!(result, Err(Error::ConfigParseError { .. })));
    }

    #[test]
    fn invalid_question_key_is_rejected() {
        let template_root = tempfile::tempdir().unwrap();
        std::fs::write(
            template_root.path().join("seeder.json"),
            r#"{"questions": {"not a name": {"type": "str"}}}"#,
        )
        .unwrap();
        let result = Config::load_config(template_root.path());
        assert!(matches!(result, Err(Error::ValidationError(_))));
    }
}
