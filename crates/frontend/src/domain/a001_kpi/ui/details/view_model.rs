use contracts::domain::a001_kpi::aggregate::DEPARTMENTS;
use contracts::domain::a001_kpi::{Frequency, Kpi, KpiDto, KpiId, KpiStatus};
use leptos::prelude::*;
use std::rc::Rc;

use crate::domain::a001_kpi::api;

fn blank_form() -> KpiDto {
    KpiDto {
        department: DEPARTMENTS[0].to_string(),
        status: Some(KpiStatus::Ongoing),
        progress: Some(0),
        budget: Some(0.0),
        frequency: Some(Frequency::Monthly),
        ..Default::default()
    }
}

/// Same checks the backend applies, run before the request leaves.
pub fn validate_form(dto: &KpiDto) -> Result<(), String> {
    if dto.target.trim().is_empty() {
        return Err("Target must not be empty".into());
    }
    Kpi::new_for_insert(dto.clone()).validate()
}

/// ViewModel for the KPI form
#[derive(Clone, Copy)]
pub struct KpiDetailsViewModel {
    pub form: RwSignal<KpiDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl KpiDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(blank_form()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    /// Load form data from server if ID is provided
    pub fn load_if_needed(&self, id: Option<KpiId>) {
        if let Some(existing_id) = id {
            let form = self.form;
            let error = self.error;
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_by_id(existing_id).await {
                    Ok(kpi) => form.set(KpiDto::from(&kpi)),
                    Err(e) => error.set(Some(format!("Failed to load KPI: {}", e))),
                }
            });
        }
    }

    pub fn reset(&self) {
        self.form.set(blank_form());
        self.error.set(None);
    }

    /// Save form data to server
    pub fn save_command(&self, on_saved: Rc<dyn Fn(KpiId)>) {
        let current = self.form.get_untracked();
        if let Err(message) = validate_form(&current) {
            self.error.set(Some(message));
            return;
        }

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::save(&current).await {
                Ok(id) => {
                    error.set(None);
                    on_saved(id);
                }
                Err(e) => error.set(Some(e)),
            }
            saving.set(false);
        });
    }
}

impl Default for KpiDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> KpiDto {
        KpiDto {
            indicator: "Customer Retention Rate".into(),
            objective: "Keep existing customers".into(),
            target: "90%".into(),
            timeline_start: "2025-01-01".into(),
            timeline_end: "2025-12-31".into(),
            ..blank_form()
        }
    }

    #[test]
    fn test_blank_form_is_rejected() {
        assert!(validate_form(&blank_form()).is_err());
    }

    #[test]
    fn test_filled_form_passes() {
        assert_eq!(validate_form(&filled_form()), Ok(()));
    }

    #[test]
    fn test_reversed_timeline_is_rejected() {
        let dto = KpiDto {
            timeline_start: "2025-12-31".into(),
            timeline_end: "2025-01-01".into(),
            ..filled_form()
        };
        assert!(validate_form(&dto).is_err());
    }
}
