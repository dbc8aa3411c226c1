use std::io::{Read, Write};

use tracing::{debug, info};

use crate::config::Config;
use crate::error::ProcessorError;
use crate::model_gateway::{ModelGateway, ModelGatewayRequest};
use crate::task::Task;

pub const SUGGESTION_DELIMITER: &str = "-------- AI suggestion ---------";

/// Drains `reader` to end-of-stream. No size limit.
pub fn read_input<R: Read>(mut reader: R) -> Result<String, ProcessorError> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(ProcessorError::Input)?;
    debug!(input_len = input.len(), "read input");
    Ok(input)
}

pub struct Processor<'a, G> {
    cfg: &'a Config,
    gateway: G,
}

impl<'a, G> Processor<'a, G>
where
    G: ModelGateway,
{
    pub fn new(cfg: &'a Config, gateway: G) -> Self {
        Self { cfg, gateway }
    }

    /// Resolves the configured task and sends its prompt. An unknown task
    /// fails before the gateway is touched.
    pub async fn process(&self, input: &str) -> Result<String, ProcessorError> {
        let task: Task = self.cfg.task.parse()?;
        info!(
            task = %task,
            model = %self.cfg.model,
            input_len = input.len(),
            "running task"
        );

        let response = self
            .gateway
            .complete(ModelGatewayRequest {
                prompt: task.prompt(input),
            })
            .await?;
        Ok(response.text)
    }

    pub fn output<W: Write>(
        &self,
        mut out: W,
        original: &str,
        result: &str,
    ) -> Result<(), ProcessorError> {
        write_output(&mut out, self.cfg.only_result, original, result)
            .and_then(|()| out.flush())
            .map_err(ProcessorError::Output)
    }

    pub async fn run<R: Read, W: Write>(&self, input: R, out: W) -> Result<(), ProcessorError> {
        let original = read_input(input)?;
        let result = self.process(&original).await?;
        self.output(out, &original, &result)
    }
}

fn write_output<W: Write>(
    out: &mut W,
    only_result: bool,
    original: &str,
    result: &str,
) -> std::io::Result<()> {
    if only_result {
        return writeln!(out, "{result}");
    }

    writeln!(out, "{original}")?;
    writeln!(out, "{SUGGESTION_DELIMITER}")?;
    writeln!(out, "{}", result.trim_end())?;
    writeln!(out, "{SUGGESTION_DELIMITER}")
}
