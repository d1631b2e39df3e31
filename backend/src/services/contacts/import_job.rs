use crate::job_controller::state::{JobUpdate, JobsState};
use common::import::tokenizer::tokenize;
use common::import::{ImportError, ImportPipeline};
use common::jobs::JobStatus;
use common::model::format::FormatOverride;
use common::model::import::ImportReport;
use log::{error, info, warn};
use tokio::sync::mpsc;
use uuid::Uuid;

/// Tokenizes the upload, reports the row count as `InProgress`, then runs the
/// rest of the pipeline. Runs on the blocking pool.
fn import_blocking(
    tx: &mpsc::Sender<JobUpdate>,
    job_id: &str,
    text: &str,
    format: FormatOverride,
) -> Result<ImportReport, ImportError> {
    let table = tokenize(text)?;
    let _ = tx.blocking_send(JobUpdate {
        job_id: job_id.to_string(),
        status: JobStatus::InProgress(u32::try_from(table.len()).unwrap_or(u32::MAX)),
    });
    Ok(ImportPipeline::default().report_table(&table, format))
}

/// Registers a new import job as `Pending` and runs the pipeline in the
/// background.
///
/// Returns the job id right away. The pipeline itself runs on tokio's
/// blocking pool; its outcome reaches the job table through the updater
/// channel as `InProgress(rows)`, then `Completed(report)` or
/// `Failed(message)`.
pub(crate) async fn schedule_import_job(
    state: &JobsState,
    text: String,
    format: FormatOverride,
) -> String {
    let job_id = Uuid::new_v4().to_string();
    state.register(&job_id).await;

    let tx = state.tx.clone();
    let job_id_for_task = job_id.clone();

    tokio::spawn(async move {
        let tx_block = tx.clone();
        let job_id_for_blocking = job_id_for_task.clone();
        let handle = tokio::task::spawn_blocking(move || {
            import_blocking(&tx_block, &job_id_for_blocking, &text, format)
        });

        let status = match handle.await {
            Ok(Ok(report)) => {
                info!(
                    "Import job {} finished: {} contacts, {} duplicates",
                    job_id_for_task, report.total, report.duplicates
                );
                JobStatus::Completed(report)
            }
            Ok(Err(e)) => {
                warn!("Import job {} rejected: {}", job_id_for_task, e);
                JobStatus::Failed(e.to_string())
            }
            Err(join_err) => {
                error!("Import job {} panicked: {}", job_id_for_task, join_err);
                JobStatus::Failed(format!("join error: {}", join_err))
            }
        };

        let _ = tx
            .send(JobUpdate {
                job_id: job_id_for_task,
                status,
            })
            .await;
    });

    job_id
}
