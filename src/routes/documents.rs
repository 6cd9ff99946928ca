//! Project document downloads.
//!
//! A fixed set of named documents is served from the configured documents
//! directory. The name in the URL maps through a lookup table to the file
//! on disk, its content type, and the filename presented to the browser;
//! anything outside the table is a 404, as is a known name whose file is
//! missing. The existence check runs before any bytes are sent.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const PDF: &str = "application/pdf";
const PPTX: &str = "application/vnd.openxmlformats-officedocument.presentationml.presentation";

/// One entry in the fixed document table.
#[derive(Debug, Clone, Copy)]
struct DocumentSpec {
    /// File name under the documents directory.
    file_name: &'static str,
    content_type: &'static str,
    /// Filename offered to the browser via Content-Disposition.
    download_name: &'static str,
}

fn document_spec(name: &str) -> Option<DocumentSpec> {
    let spec = match name {
        "team-charter" => DocumentSpec {
            file_name: "team-charter.pdf",
            content_type: PDF,
            download_name: "team-charter.pdf",
        },
        "status-report-week3-4" => DocumentSpec {
            file_name: "status-report-week3-4.pdf",
            content_type: PDF,
            download_name: "status-report-week3-4.pdf",
        },
        "status-report-week5-6" => DocumentSpec {
            file_name: "status-report-week5-6.pdf",
            content_type: PDF,
            download_name: "status-report-week5-6.pdf",
        },
        "capstone-presentation" => DocumentSpec {
            file_name: "capstone-presentation.pptx",
            content_type: PPTX,
            download_name: "PJM-6910-Capstone-Project.pptx",
        },
        _ => return None,
    };
    Some(spec)
}

/// Serve one named document: `GET /api/documents/{name}`
pub async fn get_document(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Response> {
    let spec =
        document_spec(&name).ok_or_else(|| AppError::NotFound("Document not found".into()))?;

    let path = state.docs_dir.join(spec.file_name);
    if !path.is_file() {
        tracing::error!(path = %path.display(), "document file missing");
        return Err(AppError::NotFound("Document not found".into()));
    }

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|err| AppError::Internal(format!("Failed to serve document: {err}")))?;

    tracing::info!(path = %path.display(), "serving document");

    let headers = [
        (header::CONTENT_TYPE, spec.content_type.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("inline; filename={}", spec.download_name),
        ),
    ];
    Ok((headers, bytes).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemStore;
    use axum::http::StatusCode;

    fn state_with_docs(dir: &std::path::Path) -> AppState {
        AppState::new(MemStore::new(), dir.to_path_buf())
    }

    #[test]
    fn test_document_table_is_fixed() {
        for name in [
            "team-charter",
            "status-report-week3-4",
            "status-report-week5-6",
            "capstone-presentation",
        ] {
            assert!(document_spec(name).is_some(), "missing entry for {name}");
        }
        assert!(document_spec("meeting-notes").is_none());
        assert!(document_spec("").is_none());
    }

    #[test]
    fn test_presentation_uses_pptx_content_type() {
        let spec = document_spec("capstone-presentation").unwrap();
        assert_eq!(spec.content_type, PPTX);
        assert_eq!(spec.download_name, "PJM-6910-Capstone-Project.pptx");
    }

    #[tokio::test]
    async fn test_unknown_document_name_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = get_document(State(state_with_docs(dir.path())), Path("nope".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = get_document(
            State(state_with_docs(dir.path())),
            Path("team-charter".into()),
        )
        .await
        .unwrap_err();

        match err {
            AppError::NotFound(msg) => assert_eq!(msg, "Document not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_existing_file_served_with_headers() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("team-charter.pdf"), b"%PDF-1.4 fake").unwrap();

        let response = get_document(
            State(state_with_docs(dir.path())),
            Path("team-charter".into()),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/pdf"
        );
        assert_eq!(
            response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
            "inline; filename=team-charter.pdf"
        );
    }
}
