use dialoguer::{Confirm, Input, Select};

use crate::error::Result;

pub fn confirm(skip: bool, prompt: String) -> Result<bool> {
    if skip {
        return Ok(true);
    }
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}

pub fn prompt_boolean(
    default_value: serde_json::Value,
    prompt: String,
) -> Result<serde_json::Value> {
    let default_value = default_value.as_bool().unwrap_or(false);
    let result = Confirm::new().with_prompt(prompt).default(default_value).interact()?;

    Ok(serde_json::Value::Bool(result))
}

pub fn prompt_single_choice(
    choices: Vec<String>,
    default_value: serde_json::Value,
    prompt: String,
) -> Result<serde_json::Value> {
    let default_value: usize = match &default_value {
        serde_json::Value::String(default_str) => {
            choices.iter().position(|choice| choice == default_str).unwrap_or(0)
        }
        _ => 0,
    };
    let selection = Select::new()
        .with_prompt(prompt)
        .default(default_value)
        .items(&choices)
        .interact()?;

    Ok(serde_json::Value::String(choices[selection].clone()))
}

pub fn prompt_text(
    default_value: serde_json::Value,
    prompt: String,
) -> Result<serde_json::Value> {
    let default_str = match default_value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        _ => default_value.to_string(),
    };

    let input =
        Input::new().with_prompt(&prompt).default(default_str).interact_text()?;

    Ok(serde_json::Value::String(input))
}
