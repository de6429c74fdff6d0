//! Database and data-feed tools

use crew_meta::{ParamSpec, ToolSchema};

use super::bare;
use crate::args::ToolArgs;
use crate::factory::FactoryResult;
use crate::handle::{Setting, SimulatedTool};
use crate::registry::{ToolCategory, ToolRegistration};

const PG_DESCRIPTION: &str =
    "A tool that can be used to semantic search a query from a database table's content.";

const PG_SCHEMES: [&str; 2] = ["postgres://", "postgresql://"];

pub fn pg_search_registration() -> ToolRegistration {
    let schema = ToolSchema::new()
        .param("db_uri", ParamSpec::mandatory())
        .param("table_name", ParamSpec::optional().with_default(""));

    ToolRegistration::new(
        "PGSearchTool",
        "Postgres Search",
        ToolCategory::Data,
        schema,
        |args: &ToolArgs| -> FactoryResult {
            let db_uri = args.get("db_uri").ok_or("db_uri is required")?;
            if !PG_SCHEMES.iter().any(|scheme| db_uri.starts_with(scheme)) {
                return Err(format!("db_uri must start with {}", PG_SCHEMES.join(" or ")).into());
            }
            let table = args.get("table_name");

            Ok(
                SimulatedTool::new("PGSearchTool", PG_DESCRIPTION, ToolCategory::Data)
                    .with_target(Some(match table {
                        Some(table) => format!("table {table}"),
                        None => "database".to_string(),
                    }))
                    .with_setting("table_name", table.map(|t| Setting::Text(t.to_string())))
                    .boxed(),
            )
        },
    )
    .with_description(PG_DESCRIPTION)
}

pub fn yahoo_finance_news_registration() -> ToolRegistration {
    bare(
        "YahooFinanceNewsTool",
        "Yahoo Finance News",
        ToolCategory::Data,
        "A tool that can be used to search Yahoo Finance News.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pg_rejects_foreign_scheme() {
        let reg = pg_search_registration();
        let err = reg
            .factory
            .build(&ToolArgs::new().with("db_uri", "mysql://localhost/db"))
            .unwrap_err();
        assert!(err.to_string().contains("postgres://"));
    }

    #[test]
    fn test_pg_target_names_table() {
        let reg = pg_search_registration();
        let handle = reg
            .factory
            .build(
                &ToolArgs::new()
                    .with("db_uri", "postgresql://localhost/db")
                    .with("table_name", "papers"),
            )
            .unwrap();
        assert_eq!(handle.target(), Some("table papers"));
        assert!(handle.run("transformers").unwrap().contains("table papers"));
    }
}
