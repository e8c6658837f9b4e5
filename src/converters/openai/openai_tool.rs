use serde::{de, Deserialize, Deserializer, Serialize};
use crate::converters::openai::openai_function::OpenAIFunction;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenAITool {
    #[serde(rename = "type")]
    pub r#type: String,
    pub function: OpenAIFunction,
}

impl OpenAITool {
    pub fn function(name: &str, description: &str, parameters: serde_json::Value) -> Self {
        OpenAITool {
            r#type: "function".to_string(),
            function: OpenAIFunction {
                name: name.to_string(),
                description: description.to_string(),
                parameters: Some(parameters),
            },
        }
    }

    pub fn is_function(&self) -> bool {
        self.r#type == "function"
    }
}

// Support both shapes:
// - Chat Completions style: { "type": "function", "function": { name, description, parameters } }
// - Responses API style:    { "type": "function", name, description?, parameters? }
// Anything else (e.g. { "type": "web_search" }) is kept with an empty function so it can be
// filtered out by type instead of failing the whole tool list.
impl<'de> Deserialize<'de> for OpenAITool {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = serde_json::Value::deserialize(deserializer)?;

        #[derive(Deserialize)]
        struct NestedTool {
            #[serde(rename = "type")]
            r#type: String,
            function: OpenAIFunction,
        }

        #[derive(Deserialize)]
        struct FlatTool {
            #[serde(rename = "type")]
            r#type: String,
            name: String,
            #[serde(default)]
            description: String,
            #[serde(default)]
            parameters: Option<serde_json::Value>,
        }

        #[derive(Deserialize)]
        struct TypedOnly {
            #[serde(rename = "type")]
            r#type: String,
        }

        if let Ok(n) = serde_json::from_value::<NestedTool>(v.clone()) {
            return Ok(OpenAITool { r#type: n.r#type, function: n.function });
        }
        if let Ok(f) = serde_json::from_value::<FlatTool>(v.clone()) {
            return Ok(OpenAITool {
                r#type: f.r#type,
                function: OpenAIFunction { name: f.name, description: f.description, parameters: f.parameters },
            });
        }
        if let Ok(t) = serde_json::from_value::<TypedOnly>(v) {
            if t.r#type != "function" {
                return Ok(OpenAITool {
                    r#type: t.r#type,
                    function: OpenAIFunction { name: String::new(), description: String::new(), parameters: None },
                });
            }
        }
        Err(de::Error::custom("invalid OpenAI tool format"))
    }
}
