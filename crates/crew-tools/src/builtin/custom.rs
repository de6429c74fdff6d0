//! User-configured API and file tools

use crew_meta::{ParamKind, ParamSpec, ToolSchema};

use crate::args::ToolArgs;
use crate::factory::FactoryResult;
use crate::handle::{Setting, SimulatedTool};
use crate::registry::{ToolCategory, ToolRegistration};

const API_DESCRIPTION: &str =
    "A tool that can be used to make API calls with customizable parameters.";
const FILE_WRITE_DESCRIPTION: &str =
    "A tool that can be used to write a file to a specific folder.";

pub fn custom_api_registration() -> ToolRegistration {
    let schema = ToolSchema::new()
        .param("base_url", ParamSpec::mandatory())
        .param("headers", ParamSpec::optional().with_kind(ParamKind::Map))
        .param("query_params", ParamSpec::optional().with_kind(ParamKind::Map));

    ToolRegistration::new(
        "CustomApiTool",
        "Custom API",
        ToolCategory::Custom,
        schema,
        |args: &ToolArgs| -> FactoryResult {
            let base_url = args.get("base_url").ok_or("base_url is required")?;
            if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                return Err(format!("base_url '{base_url}' is not an http(s) URL").into());
            }

            Ok(
                SimulatedTool::new("CustomApiTool", API_DESCRIPTION, ToolCategory::Custom)
                    .with_target(Some(base_url))
                    .with_setting("headers", args.json_object("headers").map(Setting::Map))
                    .with_setting(
                        "query_params",
                        args.json_object("query_params").map(Setting::Map),
                    )
                    .boxed(),
            )
        },
    )
    .with_description(API_DESCRIPTION)
}

pub fn custom_file_write_registration() -> ToolRegistration {
    let schema = ToolSchema::new()
        .param("base_folder", ParamSpec::optional().with_default("workspace"))
        .param("filename", ParamSpec::optional());

    ToolRegistration::new(
        "CustomFileWriteTool",
        "Custom File Write",
        ToolCategory::Custom,
        schema,
        |args: &ToolArgs| -> FactoryResult {
            let folder = args.get_or("base_folder", "workspace");
            let target = match args.get("filename") {
                Some(name) => format!("{folder}/{name}"),
                None => folder.to_string(),
            };
            Ok(SimulatedTool::new(
                "CustomFileWriteTool",
                FILE_WRITE_DESCRIPTION,
                ToolCategory::Custom,
            )
            .with_target(Some(target))
            .boxed())
        },
    )
    .with_description(FILE_WRITE_DESCRIPTION)
}
