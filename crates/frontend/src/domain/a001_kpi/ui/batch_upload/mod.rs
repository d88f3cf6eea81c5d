use contracts::domain::a001_kpi::import::CSV_HEADER;
use contracts::domain::a001_kpi::ImportReport;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::domain::a001_kpi::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::page_header::PageHeader;
use crate::shared::export::download_text;
use crate::shared::icons::icon;

const SAMPLE_ROW: &str = "Customer Satisfaction Score,Sales,Improve post-sale support,85%,78%,Ongoing,40,250000,Quarterly,Quarterly surveys,Survey results,,2025-01-01,2025-12-31";

/// Header plus one example row, offered as a starting point.
pub fn csv_template() -> String {
    format!("{}\n{}\n", CSV_HEADER.join(","), SAMPLE_ROW)
}

async fn read_file(file: web_sys::File) -> Result<String, String> {
    let text = JsFuture::from(file.text())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;
    text.as_string()
        .ok_or_else(|| "File is not valid text".to_string())
}

#[component]
fn ImportResult(report: ImportReport) -> impl IntoView {
    let intent = if report.rejected.is_empty() {
        MessageBarIntent::Success
    } else {
        MessageBarIntent::Warning
    };
    let headline = format!(
        "Imported {} of {} rows, {} rejected",
        report.imported_count(),
        report.total_rows(),
        report.rejected_count()
    );

    view! {
        <div class="panel">
            <MessageBar intent=intent>{headline}</MessageBar>
            {(!report.rejected.is_empty()).then(|| view! {
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell attr:style="width: 80px;">"Line"</TableHeaderCell>
                            <TableHeaderCell>"Reason"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {report.rejected.into_iter().map(|row| view! {
                            <TableRow>
                                <TableCell>{row.line}</TableCell>
                                <TableCell>{row.reason}</TableCell>
                            </TableRow>
                        }).collect_view()}
                    </TableBody>
                </Table>
            })}
        </div>
    }
}

#[component]
pub fn BatchKpiUpload() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let content = RwSignal::new(String::new());
    let file_name = RwSignal::new(None::<String>);
    let uploading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let report = RwSignal::new(None::<ImportReport>);

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        let Some(file) = input.and_then(|i| i.files()).and_then(|files| files.get(0)) else {
            return;
        };
        file_name.set(Some(file.name()));
        report.set(None);
        spawn_local(async move {
            match read_file(file).await {
                Ok(text) => {
                    content.set(text);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let upload = move |_| {
        let body = content.get_untracked();
        if body.trim().is_empty() {
            error.set(Some("Paste CSV rows or choose a file first".into()));
            return;
        }
        uploading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::import_csv(body).await {
                Ok(result) => {
                    log::info!(
                        "KPI import: {} imported, {} rejected",
                        result.imported_count(),
                        result.rejected_count()
                    );
                    report.set(Some(result));
                }
                Err(e) => error.set(Some(e)),
            }
            uploading.set(false);
        });
    };

    let download_template = move |_| {
        if let Err(e) = download_text(&csv_template(), "kpi_template.csv", "text/csv") {
            error.set(Some(e));
        }
    };

    view! {
        <div class="page page--batch-upload">
            <PageHeader title="Batch KPI Upload" subtitle="Create many KPIs from a CSV file">
                <Button appearance=ButtonAppearance::Secondary on_click=download_template>
                    {icon("download")}
                    " Template"
                </Button>
            </PageHeader>

            <div class="panel">
                <p class="panel__hint">
                    "Columns: " {CSV_HEADER.join(", ")}
                </p>
                <div class="form__group">
                    <label class="form__label">"CSV file"</label>
                    <input type="file" accept=".csv,text/csv" on:change=handle_file_select />
                    {move || file_name.get().map(|name| view! { <span class="form__hint">{name}</span> })}
                </div>
                <div class="form__group">
                    <label class="form__label">"Or paste rows"</label>
                    <textarea
                        class="form__textarea form__textarea--code"
                        rows="10"
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                </div>

                {move || error.get().map(|e| view! {
                    <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
                })}

                <div class="details-actions">
                    <Button appearance=ButtonAppearance::Primary on_click=upload disabled=uploading>
                        {icon("BulkUpload")}
                        " Upload"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| ctx.navigate("/all-kpis")>
                        "View KPIs"
                    </Button>
                </div>
            </div>

            {move || report.get().map(|r| view! { <ImportResult report=r /> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_matches_header() {
        let template = csv_template();
        let mut lines = template.lines();
        let header = lines.next().unwrap();
        assert_eq!(header.split(',').count(), CSV_HEADER.len());
        let sample = lines.next().unwrap();
        assert_eq!(sample.split(',').count(), CSV_HEADER.len());
    }
}
