use std::{fs, path::Path};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    config::load_config,
    core::{
        DottedKey, KeyStatus, LocaleIndex, ResolvedLocation, SnippetMode, Workspace,
        template::{extract_references, key_at},
    },
    utils::char_column,
};

use super::types::{
    CandidateDto, ConfigDto, ConfigValues, GetConfigParams, GetTranslationsParams,
    LocateKeyParams, LocateKeyResult, LocationDto, Pagination, ReferenceItem,
    ScanReferencesParams, ScanReferencesResult, SetTranslationsParams, SetTranslationsResult,
    TranslationDto, TranslationsResult,
};

#[derive(Clone)]
pub struct NeonkeyMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for NeonkeyMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl NeonkeyMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get project configuration
    #[tool(
        description = "Get the project configuration (.neonkeyrc.json or defaults). The translation API key is never returned, only whether one is set."
    )]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        to_tool_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// Find the defining line of a key
    #[tool(
        description = "Find where a translation key is defined. Pass either a dotted key, or templatePath + line (+ column) of a {_key} macro to resolve it through the enclosing {translator} namespace."
    )]
    pub async fn locate_key(
        &self,
        params: Parameters<LocateKeyParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let workspace = load_workspace(&params.project_root_path)?;

        let key = match (&params.key, &params.template_path) {
            (Some(key), _) => parse_key(key)?,
            (None, Some(template)) => {
                let template = Path::new(&params.project_root_path).join(template);
                let line = params.line.map(|l| l as usize).unwrap_or(1);
                let column = params.column.map(|c| c as usize);
                key_at(&template, line, column)
                    .map_err(|e| McpError::invalid_params(format!("{:#}", e), None))?
            }
            (None, None) => {
                return Err(McpError::invalid_params(
                    "Either key or templatePath is required",
                    None,
                ));
            }
        };

        let candidates = workspace.candidates(&key);
        let location = workspace
            .find_definition(&key)
            .map_err(|e| McpError::internal_error(format!("Lookup failed: {:#}", e), None))?;

        to_tool_result(&LocateKeyResult {
            key: key.to_string(),
            found: location.is_some(),
            location: location.map(|loc| location_dto(&workspace, &loc)),
            candidates: candidates
                .iter()
                .map(|c| CandidateDto::new(c, workspace.project_dir()))
                .collect(),
        })
    }

    /// Read a key in every locale
    #[tool(
        description = "Get the value of a translation key in every locale file of its domain. Undefined entries have defined=false and an empty value."
    )]
    pub async fn get_translations(
        &self,
        params: Parameters<GetTranslationsParams>,
    ) -> Result<CallToolResult, McpError> {
        let workspace = load_workspace(&params.0.project_root_path)?;
        let key = parse_key(&params.0.key)?;

        let session = workspace
            .open_session(key)
            .map_err(|e| McpError::internal_error(format!("Failed to read translations: {:#}", e), None))?;

        to_tool_result(&TranslationsResult {
            key: session.key().to_string(),
            entries: session
                .entries()
                .iter()
                .map(|e| TranslationDto::new(e, workspace.project_dir()))
                .collect(),
        })
    }

    /// Write a key in several locales
    #[tool(
        description = "Set the value of a translation key per locale. Existing lines are rewritten in place, missing keys are appended to the locale file. Empty values are skipped."
    )]
    pub async fn set_translations(
        &self,
        params: Parameters<SetTranslationsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let workspace = load_workspace(&params.project_root_path)?;
        let key = parse_key(&params.key)?;

        let session = workspace
            .open_session(key.clone())
            .map_err(|e| McpError::internal_error(format!("Failed to read translations: {:#}", e), None))?;
        let report = session
            .save(&params.translations)
            .map_err(|e| McpError::internal_error(format!("Failed to write translations: {:#}", e), None))?;

        to_tool_result(&SetTranslationsResult::new(
            key.to_string(),
            report,
            workspace.project_dir(),
        ))
    }

    /// List translation macros in templates
    #[tool(
        description = "Scan Latte templates for {_key} macros and report whether each key is defined. Returns paginated list of references."
    )]
    pub async fn scan_references(
        &self,
        params: Parameters<ScanReferencesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let limit = params.limit.map(|v| v as usize).unwrap_or(50).min(200);
        let offset = params.offset.map(|v| v as usize).unwrap_or(0);
        let undefined_only = params.undefined_only.unwrap_or(false);

        let workspace = load_workspace(&params.project_root_path)?;
        let templates = match &params.template_path {
            Some(template) => vec![Path::new(&params.project_root_path).join(template)],
            None => workspace
                .template_files()
                .map_err(|e| McpError::internal_error(format!("Scan failed: {:#}", e), None))?,
        };

        let (index, failures) = workspace.index_locale_files();
        for (path, e) in &failures {
            warn!("Failed to read {}: {}", path.display(), e);
        }

        let mut all_items = Vec::new();
        for template in &templates {
            let source = match fs::read_to_string(template) {
                Ok(source) => source,
                Err(e) if params.template_path.is_some() => {
                    return Err(McpError::invalid_params(
                        format!("Failed to read template {}: {}", template.display(), e),
                        None,
                    ));
                }
                Err(e) => {
                    warn!("Failed to read {}: {}", template.display(), e);
                    continue;
                }
            };
            all_items.extend(scan_template(&workspace, &index, template, &source));
        }

        let undefined_count = all_items.iter().filter(|i| i.status != "defined").count();
        if undefined_only {
            all_items.retain(|i| i.status != "defined");
        }
        let total_count = all_items.len();
        debug!("Found {} reference(s), {} undefined", total_count, undefined_count);

        let items: Vec<ReferenceItem> = all_items.into_iter().skip(offset).take(limit).collect();
        let has_more = offset + items.len() < total_count;

        to_tool_result(&ScanReferencesResult {
            template_count: templates.len(),
            total_count,
            undefined_count,
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }
}

#[tool_handler]
impl ServerHandler for NeonkeyMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Neonkey MCP helps AI agents maintain NEON translation files referenced from Latte templates.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. scan_references - List {_key} macros in templates and whether each key is defined (paginated)\n\
                 3. locate_key - Find the file and line defining a key, by key or by template position\n\
                 4. get_translations - Get a key's value in every locale\n\
                 5. set_translations - Write a key's value per locale\n\n\
                 Recommended Workflow:\n\
                 1. Use scan_references with undefinedOnly=true to find missing keys\n\
                 2. Use get_translations to see which locales already have a value\n\
                 3. Use set_translations to add the missing values in every locale\n\n\
                 Keys are dotted paths whose first segment is the domain: 'admin.dashboard.title' \
                 lives in admin.<locale>.neon files."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = NeonkeyMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}

fn load_workspace(project_root_path: &str) -> Result<Workspace, McpError> {
    let path = Path::new(project_root_path);
    let loaded = load_config(path)
        .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))?;
    Workspace::load(&loaded.project_dir, loaded.config)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))
}

fn parse_key(key: &str) -> Result<DottedKey, McpError> {
    DottedKey::parse(key.trim()).map_err(|e| McpError::invalid_params(e.to_string(), None))
}

fn location_dto(workspace: &Workspace, location: &ResolvedLocation) -> LocationDto {
    LocationDto {
        file_path: workspace.display_path(&location.path),
        line: location.line + 1,
        locale: location.locale.clone(),
    }
}

fn scan_template(
    workspace: &Workspace,
    index: &LocaleIndex,
    template: &Path,
    source: &str,
) -> Vec<ReferenceItem> {
    let file_path = workspace.display_path(template);
    let lines: Vec<&str> = source.lines().collect();

    extract_references(source, SnippetMode::Sever)
        .into_iter()
        .map(|reference| {
            let full_key = reference.full_key();
            let (status, definition) = match DottedKey::parse(&full_key) {
                Ok(key) => match workspace.key_status(index, &key) {
                    KeyStatus::Defined(loc) => ("defined", Some(location_dto(workspace, &loc))),
                    KeyStatus::Undefined { .. } => ("undefined", None),
                    KeyStatus::NoCandidateFiles => ("no_candidate_files", None),
                },
                Err(_) => ("undefined", None),
            };
            let line_text = lines.get(reference.line).copied().unwrap_or_default();

            ReferenceItem {
                file_path: file_path.clone(),
                line: reference.line + 1,
                column: char_column(line_text, reference.column),
                raw_key: reference.raw_key,
                full_key,
                absolute: reference.absolute,
                modifiers: reference.modifiers,
                status: status.to_string(),
                definition,
            }
        })
        .collect()
}

fn to_tool_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}
