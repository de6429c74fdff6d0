//! Web search and scraping tools

use crew_meta::{ParamKind, ParamSpec, ToolSchema};

use super::targeted;
use crate::args::ToolArgs;
use crate::factory::FactoryResult;
use crate::handle::{Setting, SimulatedTool};
use crate::registry::{ToolCategory, ToolRegistration};

const SERPER_DESCRIPTION: &str =
    "A tool that can be used to search the internet with a search_query";
const EXA_DESCRIPTION: &str = "A tool that can be used to search the internet from a search_query";
const SELENIUM_DESCRIPTION: &str = "A tool that can be used to scrape websites with Selenium. \
    Useful for dynamic websites that require JavaScript.";
const SCRAPE_ELEMENT_DESCRIPTION: &str = "A tool that can be used to read a specific part of \
    website content. CSS elements are separated by comma, cookies in format {key:value},{key:value}";

pub fn serper_dev_registration() -> ToolRegistration {
    api_key_search(
        "SerperDevTool",
        "Serper Web Search",
        SERPER_DESCRIPTION,
        "SERPER_API_KEY",
    )
}

pub fn exa_search_registration() -> ToolRegistration {
    api_key_search("EXASearchTool", "EXA Search", EXA_DESCRIPTION, "EXA_API_KEY")
}

/// Search tool keyed by an API key that may come from the descriptor or
/// from a runtime override.
fn api_key_search(
    type_name: &'static str,
    display_name: &'static str,
    description: &'static str,
    key_param: &'static str,
) -> ToolRegistration {
    ToolRegistration::new(
        type_name,
        display_name,
        ToolCategory::Web,
        ToolSchema::new().param(key_param, ParamSpec::optional().with_kind(ParamKind::Secret)),
        move |args: &ToolArgs| -> FactoryResult {
            if args.get(key_param).is_none() {
                return Err(format!(
                    "{key_param} is not set; configure the parameter or a runtime override"
                )
                .into());
            }
            Ok(SimulatedTool::new(type_name, description, ToolCategory::Web).boxed())
        },
    )
    .with_description(description)
}

pub fn website_search_registration() -> ToolRegistration {
    targeted(
        "WebsiteSearchTool",
        "Website Search",
        ToolCategory::Web,
        "A tool that can be used to semantic search a query from a specific URL content.",
        "website",
        ParamSpec::optional(),
    )
}

pub fn scrape_website_registration() -> ToolRegistration {
    targeted(
        "ScrapeWebsiteTool",
        "Scrape Website",
        ToolCategory::Web,
        "A tool that can be used to read website content.",
        "website_url",
        ParamSpec::optional(),
    )
}

pub fn selenium_scraping_registration() -> ToolRegistration {
    let schema = ToolSchema::new()
        .param("website_url", ParamSpec::mandatory())
        .param("cookie", ParamSpec::optional().with_kind(ParamKind::Map))
        .param("wait_time", ParamSpec::optional());

    ToolRegistration::new(
        "SeleniumScrapingTool",
        "Selenium Scraping",
        ToolCategory::Web,
        schema,
        |args: &ToolArgs| -> FactoryResult {
            Ok(SimulatedTool::new(
                "SeleniumScrapingTool",
                SELENIUM_DESCRIPTION,
                ToolCategory::Web,
            )
            .with_target(args.get("website_url"))
            .with_setting("cookie", args.pairs("cookie").map(Setting::Map))
            .with_setting("wait_time", wait_time(args).map(Setting::Seconds))
            .boxed())
        },
    )
    .with_description(SELENIUM_DESCRIPTION)
}

/// `wait_time` in whole seconds; unparsable values are ignored.
fn wait_time(args: &ToolArgs) -> Option<u64> {
    let raw = args.get("wait_time")?;
    match raw.trim().parse::<u64>() {
        Ok(secs) => Some(secs),
        Err(_) => {
            tracing::warn!(wait_time = raw, "ignoring non-numeric wait_time");
            None
        }
    }
}

pub fn scrape_element_registration() -> ToolRegistration {
    let schema = ToolSchema::new()
        .param("website_url", ParamSpec::optional())
        .param("css_element", ParamSpec::optional().with_kind(ParamKind::List))
        .param("cookie", ParamSpec::optional().with_kind(ParamKind::Map));

    ToolRegistration::new(
        "ScrapeElementFromWebsiteTool",
        "Scrape Element From Website",
        ToolCategory::Web,
        schema,
        |args: &ToolArgs| -> FactoryResult {
            Ok(SimulatedTool::new(
                "ScrapeElementFromWebsiteTool",
                SCRAPE_ELEMENT_DESCRIPTION,
                ToolCategory::Web,
            )
            .with_target(args.get("website_url"))
            .with_setting("css_element", args.list("css_element").map(Setting::List))
            .with_setting("cookie", args.pairs("cookie").map(Setting::Map))
            .boxed())
        },
    )
    .with_description(SCRAPE_ELEMENT_DESCRIPTION)
}
