//! Sheet transfer: the per-sheet copy algorithm and the orchestrator
//! that fans it out.
//!
//! One task per source sheet, all sharing one [`SheetsClient`]. A sheet's
//! failure never aborts its siblings; the run's result is a per-sheet
//! manifest, not an all-or-nothing transaction.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, error, info};

use crate::common::{Error, Result};
use crate::remote::api::Dimension;
use crate::remote::{Range, SheetsClient, SheetsTransport};
use crate::source::TabularSheet;

/// Copy one source sheet into the destination document.
///
/// Creates the destination sheet (collision-resolved), grows its grid when
/// the data exceeds the capacity the service reported for it, and writes
/// the whole matrix in a single bulk call. On success the destination
/// sheet holds exactly the source matrix in source order.
pub async fn transfer_sheet<T: SheetsTransport>(
    sheet: &TabularSheet,
    client: &SheetsClient<T>,
) -> Result<()> {
    let destination = client.create_sheet(sheet.name()).await?;

    let rows = sheet.row_count();
    let columns = sheet.column_count();
    if rows == 0 || columns == 0 {
        // Nothing to write; the empty destination sheet is the copy
        debug!(sheet = %destination.title, "source sheet is empty, skipping write");
        return Ok(());
    }

    let range = Range::new(destination.title.clone(), rows, columns)?;

    // Grow past the reported grid capacity before writing, otherwise the
    // service rejects the write with a grid-limits error
    let capacity = &destination.grid_properties;
    if columns as u32 > capacity.column_count {
        client
            .append_dimension(
                destination.sheet_id,
                Dimension::Columns,
                columns as u32 - capacity.column_count,
            )
            .await?;
    }
    if rows as u32 > capacity.row_count {
        client
            .append_dimension(
                destination.sheet_id,
                Dimension::Rows,
                rows as u32 - capacity.row_count,
            )
            .await?;
    }

    client.write_values(&range, sheet.to_value_matrix()).await
}

/// Outcome of one sheet's transfer.
#[derive(Debug)]
pub struct SheetOutcome {
    /// Source sheet name
    pub sheet: String,
    pub result: Result<()>,
}

/// Manifest of a whole run: one outcome per source sheet, in source
/// order, plus the elapsed wall-clock time.
#[derive(Debug)]
pub struct TransferReport {
    pub outcomes: Vec<SheetOutcome>,
    pub elapsed: Duration,
}

impl TransferReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.result.is_ok())
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }
}

/// Copy every source sheet concurrently and wait for all of them.
///
/// Each sheet gets its own task; a failing sheet is reported in the
/// manifest and does not cancel the others. Nothing is retried here —
/// callers that want retry re-run the failed subset.
pub async fn transfer_workbook<T>(
    sheets: Vec<TabularSheet>,
    client: Arc<SheetsClient<T>>,
) -> TransferReport
where
    T: SheetsTransport + 'static,
{
    let started = Instant::now();

    let handles: Vec<_> = sheets
        .into_iter()
        .map(|sheet| {
            let client = Arc::clone(&client);
            let name = sheet.name().to_string();
            let handle = tokio::spawn(async move {
                debug!(sheet = %sheet.name(), rows = sheet.row_count(), columns = sheet.column_count(), "starting transfer");
                transfer_sheet(&sheet, &client).await
            });
            (name, handle)
        })
        .collect();

    let mut outcomes = Vec::with_capacity(handles.len());
    for (sheet, handle) in handles {
        let result = match handle.await {
            Ok(result) => result,
            Err(join_error) => Err(Error::Other(format!(
                "transfer task for '{sheet}' aborted: {join_error}"
            ))),
        };
        match &result {
            Ok(()) => info!(sheet = %sheet, "sheet copied"),
            Err(reason) => error!(sheet = %sheet, "sheet transfer failed: {reason}"),
        }
        outcomes.push(SheetOutcome { sheet, result });
    }

    TransferReport {
        outcomes,
        elapsed: started.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::api::GridProperties;
    use crate::remote::transport::mock::MockTransport;
    use crate::source::Scalar;
    use serde_json::json;

    fn sheet_with_size(name: &str, rows: usize, columns: usize) -> TabularSheet {
        let header = (0..columns).map(|index| format!("col{index}")).collect();
        let matrix = (0..rows)
            .map(|row| (0..columns).map(|col| Scalar::Number((row * columns + col) as f64)).collect())
            .collect();
        TabularSheet::new(name, header, matrix)
    }

    async fn client_with(transport: MockTransport) -> Arc<SheetsClient<MockTransport>> {
        Arc::new(SheetsClient::open(transport).await.unwrap())
    }

    #[tokio::test]
    async fn test_wide_sheet_grows_columns_only() {
        let client = client_with(MockTransport::new()).await;
        let sheet = sheet_with_size("Wide", 500, 30);

        transfer_sheet(&sheet, &client).await.unwrap();

        let state = client.transport().state.lock().unwrap();
        assert_eq!(state.appended, vec![(0, Dimension::Columns, 4)]);
        assert_eq!(state.written.len(), 1);
        assert_eq!(state.written[0].range, "Wide!A1:AD500");
    }

    #[tokio::test]
    async fn test_tall_sheet_grows_rows_only() {
        let client = client_with(MockTransport::new()).await;
        let sheet = sheet_with_size("Tall", 1200, 10);

        transfer_sheet(&sheet, &client).await.unwrap();

        let state = client.transport().state.lock().unwrap();
        assert_eq!(state.appended, vec![(0, Dimension::Rows, 200)]);
        assert_eq!(state.written[0].range, "Tall!A1:J1200");
    }

    #[tokio::test]
    async fn test_growth_follows_the_reported_grid_capacity() {
        // A destination template with a roomier default grid needs no growth
        let transport = MockTransport::with_grid(GridProperties {
            row_count: 2000,
            column_count: 50,
        });
        let client = client_with(transport).await;
        let sheet = sheet_with_size("Roomy", 1200, 30);

        transfer_sheet(&sheet, &client).await.unwrap();

        let state = client.transport().state.lock().unwrap();
        assert!(state.appended.is_empty());
    }

    #[tokio::test]
    async fn test_small_sheet_writes_without_growth() {
        let client = client_with(MockTransport::new()).await;
        let sheet = sheet_with_size("Small", 5, 3);

        transfer_sheet(&sheet, &client).await.unwrap();

        let state = client.transport().state.lock().unwrap();
        assert!(state.appended.is_empty());
        assert_eq!(state.written[0].range, "Small!A1:C5");
        assert_eq!(state.written[0].values.len(), 5);
    }

    #[tokio::test]
    async fn test_workbook_transfer_matches_the_two_sheet_scenario() {
        let client = client_with(MockTransport::new()).await;
        let jan = TabularSheet::new(
            "Jan",
            vec!["a".to_string(), "b".to_string()],
            vec![
                vec![Scalar::Number(1.0), Scalar::Number(2.0)],
                vec![Scalar::Number(3.0), Scalar::Number(4.0)],
            ],
        );
        let feb = TabularSheet::new("Feb", vec![], vec![]);

        let report = transfer_workbook(vec![jan, feb], Arc::clone(&client)).await;

        assert!(report.all_succeeded());
        assert_eq!(report.succeeded(), 2);
        assert_eq!(
            report
                .outcomes
                .iter()
                .map(|outcome| outcome.sheet.as_str())
                .collect::<Vec<_>>(),
            ["Jan", "Feb"]
        );

        let transport = client.transport();
        // Creation order is up to the scheduler; both sheets must exist
        let mut titles = transport.sheet_titles();
        titles.sort();
        assert_eq!(titles, ["Feb", "Jan"]);

        let state = transport.state.lock().unwrap();
        // Only Jan produced a write; Feb's empty matrix degenerates to none
        assert_eq!(state.written.len(), 1);
        assert_eq!(state.written[0].range, "Jan!A1:B2");
        assert_eq!(
            state.written[0].values,
            vec![
                vec![json!(1.0), json!(2.0)],
                vec![json!(3.0), json!(4.0)],
            ]
        );
    }

    #[tokio::test]
    async fn test_one_failing_sheet_does_not_abort_the_others() {
        let transport = MockTransport::new();
        transport.state.lock().unwrap().fail_title = Some("Poisoned".to_string());
        let client = client_with(transport).await;

        let report = transfer_workbook(
            vec![
                sheet_with_size("Good", 2, 2),
                sheet_with_size("Poisoned", 2, 2),
            ],
            Arc::clone(&client),
        )
        .await;

        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.failed(), 1);
        assert!(report.outcomes[0].result.is_ok());
        assert!(matches!(
            report.outcomes[1].result,
            Err(Error::RemoteService(_))
        ));

        // The good sheet still arrived in full
        let state = client.transport().state.lock().unwrap();
        assert_eq!(state.written.len(), 1);
        assert_eq!(state.written[0].range, "Good!A1:B2");
    }
}
