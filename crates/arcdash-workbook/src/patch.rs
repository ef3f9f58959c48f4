//! Workbook patch pipeline
//!
//! Linear Load → Migrate → UpdateParameters → Save run over a single file,
//! terminal on the first error. Dry-run mode performs every step except the
//! final save, reporting what an apply run would change.

use crate::document::Workbook;
use crate::error::WorkbookResult;
use crate::parameters::update_tab_parameters;
use crate::visibility::migrate_arc_tab_visibility;
use std::path::Path;

/// Whether the patched document is written back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchMode {
    /// Overwrite the source file with the patched document
    Apply,
    /// Run the full transformation but skip the save
    DryRun,
}

/// Counts of what a patch run changed (or would change)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchReport {
    /// Nodes whose legacy visibility rule was migrated
    pub migrated_nodes: usize,
    /// Tab parameters rewritten to dynamic queries
    pub parameters_rewritten: usize,
}

/// Patch a workbook file in place
///
/// # Errors
/// Returns the first load or save failure; the transformation steps
/// themselves cannot fail.
pub fn fix_workbook(path: impl AsRef<Path>, mode: PatchMode) -> WorkbookResult<PatchReport> {
    let path = path.as_ref();
    let mut workbook = Workbook::load(path)?;

    let migrated_nodes = migrate_arc_tab_visibility(workbook.root_mut());
    let parameters_rewritten = update_tab_parameters(workbook.root_mut());
    tracing::info!(
        "Patched {}: {} visibility nodes migrated, {} tab parameters rewritten",
        path.display(),
        migrated_nodes,
        parameters_rewritten
    );

    if mode == PatchMode::Apply {
        workbook.save(path)?;
    }

    Ok(PatchReport {
        migrated_nodes,
        parameters_rewritten,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    #[test]
    fn apply_writes_the_patched_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workbook.json");
        fs::write(
            &path,
            serde_json::to_string(&json!({
                "items": [
                    {"conditionalVisibility": {"parameterName": "ArcTab", "comparison": "isEqualTo", "value": "billing"}}
                ]
            }))
            .unwrap(),
        )
        .unwrap();

        let report = fix_workbook(&path, PatchMode::Apply).unwrap();

        assert_eq!(report.migrated_nodes, 1);
        let saved = fs::read_to_string(&path).unwrap();
        assert!(saved.contains("conditionalVisibilities"));
        assert!(!saved.contains("\"conditionalVisibility\""));
    }

    #[test]
    fn dry_run_leaves_the_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workbook.json");
        let original = serde_json::to_string(&json!({
            "items": [{"type": 9, "content": {"parameters": [{"name": "SqlTab"}]}}]
        }))
        .unwrap();
        fs::write(&path, &original).unwrap();

        let report = fix_workbook(&path, PatchMode::DryRun).unwrap();

        assert_eq!(report.parameters_rewritten, 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }
}
