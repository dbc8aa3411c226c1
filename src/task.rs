use std::fmt;
use std::str::FromStr;

use crate::error::ProcessorError;

const PROOFREAD_TEMPLATE: &str = "Act as a proofreader and review the following text.
Feel free to rephrase sentences or make changes to enhance clarity but maintain the overall tone and style of the original.
Try to keep the changes minimal, avoid excesive refactoring of sentences.
Only print the final corrected version, never add any reasoning to the output.
Here is the text: ";

const TRANSLATE_TEMPLATE: &str = "You are a translator that converts any given input text into English.  First, try to identify the language of the input.
If you are not certain about the language, assume it is Czech.
Translate the text into English as faithfully as possible, preserving the tone (e.g., formal, informal, emotional, sarcastic, etc.).
Do not add explanations or comments—just output the translated English text.
Input: ";

const COMMIT_TEMPLATE: &str = "You are an AI assistant that improves commit messages based on the provided diff.
Input:
A text block containing three parts:
1.  A commit message (may be empty).
2.  Comment lines, each starting with '#'.
3.  A diff in the standard diff format.
Task:
Analyze the provided diff to understand the changes made. Enhance the existing commit message with a concise summary of these changes. If the commit message is empty, create a new informative commit message based on the diff. The output should preserve any existing comment lines and the original diff, placing them after the (potentially enhanced or newly created) commit message.
Input: ";

/// A named text transformation, each backed by a fixed prompt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Proofread,
    Translate,
    Commit,
}

impl Task {
    pub const ALL: [Task; 3] = [Task::Proofread, Task::Translate, Task::Commit];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Proofread => "proofread",
            Self::Translate => "translate",
            Self::Commit => "commit",
        }
    }

    pub fn template(&self) -> &'static str {
        match self {
            Self::Proofread => PROOFREAD_TEMPLATE,
            Self::Translate => TRANSLATE_TEMPLATE,
            Self::Commit => COMMIT_TEMPLATE,
        }
    }

    /// The template followed by the input, which is appended untouched.
    pub fn prompt(&self, input: &str) -> String {
        let template = self.template();
        let mut prompt = String::with_capacity(template.len() + input.len());
        prompt.push_str(template);
        prompt.push_str(input);
        prompt
    }
}

impl FromStr for Task {
    type Err = ProcessorError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "proofread" => Ok(Self::Proofread),
            "translate" => Ok(Self::Translate),
            "commit" => Ok(Self::Commit),
            other => Err(ProcessorError::UnsupportedTask(other.to_string())),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
