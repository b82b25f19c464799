//! Applicant input widgets. Every widget constrains its value to the field's
//! domain, so the record read back is always encodable.

use std::ops::RangeInclusive;

use eframe::egui::{self, Ui};

use crate::application::{
    APPLICANT_INCOME_RANGE, COAPPLICANT_INCOME_RANGE, Choice, DEPENDENTS_RANGE,
    LOAN_AMOUNT_RANGE, LOAN_AMOUNT_TERM_RANGE, LoanApplication,
};

const FIELD_WIDTH: f32 = 260.0;

/// Render the two-column form plus the property area row.
///
/// Returns true when any value changed this frame.
pub(super) fn render_form(ui: &mut Ui, form: &mut LoanApplication) -> bool {
    let mut changed = false;
    ui.columns(2, |columns| {
        changed |= render_personal_column(&mut columns[0], form);
        changed |= render_financial_column(&mut columns[1], form);
    });
    ui.add_space(8.0);
    changed |= choice_field(ui, "property_area", "Property Area", &mut form.property_area);
    changed
}

fn render_personal_column(ui: &mut Ui, form: &mut LoanApplication) -> bool {
    let mut changed = false;
    changed |= choice_field(ui, "gender", "Gender", &mut form.gender);
    changed |= choice_field(ui, "married", "Married", &mut form.married);
    changed |= number_field(
        ui,
        "Number of Dependents",
        &mut form.dependents,
        DEPENDENTS_RANGE,
    );
    changed |= choice_field(ui, "education", "Education", &mut form.education);
    changed |= choice_field(ui, "self_employed", "Self Employed", &mut form.self_employed);
    changed
}

fn render_financial_column(ui: &mut Ui, form: &mut LoanApplication) -> bool {
    let mut changed = false;
    changed |= number_field(
        ui,
        "Applicant Income",
        &mut form.applicant_income,
        APPLICANT_INCOME_RANGE,
    );
    changed |= number_field(
        ui,
        "Coapplicant Income",
        &mut form.coapplicant_income,
        COAPPLICANT_INCOME_RANGE,
    );
    changed |= number_field(
        ui,
        "Loan Amount (in thousands)",
        &mut form.loan_amount,
        LOAN_AMOUNT_RANGE,
    );
    changed |= number_field(
        ui,
        "Loan Amount Term (in days)",
        &mut form.loan_amount_term,
        LOAN_AMOUNT_TERM_RANGE,
    );
    changed |= choice_field(ui, "credit_history", "Credit History", &mut form.credit_history);
    changed
}

fn choice_field<C: Choice>(ui: &mut Ui, id: &str, label: &str, value: &mut C) -> bool {
    let mut changed = false;
    ui.label(label);
    egui::ComboBox::from_id_salt(id)
        .width(FIELD_WIDTH)
        .selected_text(value.label())
        .show_ui(ui, |ui| {
            for &choice in C::ALL {
                if ui
                    .selectable_label(*value == choice, choice.label())
                    .clicked()
                    && *value != choice
                {
                    *value = choice;
                    changed = true;
                }
            }
        });
    ui.add_space(6.0);
    changed
}

fn number_field(ui: &mut Ui, label: &str, value: &mut u32, range: RangeInclusive<u32>) -> bool {
    ui.label(label);
    let changed = ui
        .add_sized(
            [FIELD_WIDTH, 22.0],
            egui::DragValue::new(value).speed(1.0).range(range),
        )
        .changed();
    ui.add_space(6.0);
    changed
}
