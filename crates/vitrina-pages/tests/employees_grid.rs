//! Grid contracts on the employees list: status toggler idempotence and
//! transitions, filter/reset counting, row deletion through the confirm
//! modal, and the bulk enable/disable/delete protocols.

mod common;

use common::{make_employees_page, tab_for, EmployeesModel};
use std::sync::{Arc, Mutex};
use vitrina::Row;
use vitrina_pages::bo::{shell, EmployeeColumn, EmployeesPage, FilterKind};

fn setup() -> (Arc<Mutex<EmployeesModel>>, EmployeesPage) {
    let model = Arc::new(Mutex::new(EmployeesModel::demo()));
    let page = make_employees_page(&model);
    let tab = tab_for(&page);
    (model, EmployeesPage::new(&tab))
}

#[tokio::test]
async fn toggle_is_a_noop_when_state_already_matches() {
    let (_model, employees) = setup();
    assert!(employees.status(Row::new(1)).await);
    let changed = employees.set_status(Row::new(1), true).await.expect("toggle");
    assert!(!changed, "asking for the current state must not click");
    assert!(employees.status(Row::new(1)).await);
}

#[tokio::test]
async fn toggle_flips_state_and_reports_change() {
    let (_model, employees) = setup();

    let changed = employees.set_status(Row::new(1), false).await.expect("disable");
    assert!(changed);
    assert!(!employees.status(Row::new(1)).await);

    let changed = employees.set_status(Row::new(1), true).await.expect("enable");
    assert!(changed);
    assert!(employees.status(Row::new(1)).await);
}

#[tokio::test]
async fn header_reports_row_count_and_cells_read_back() {
    let (_model, employees) = setup();
    assert!(employees
        .page_title()
        .await
        .expect("title")
        .contains(EmployeesPage::PAGE_TITLE));
    assert_eq!(employees.grid_row_count().await.expect("count"), 3);
    assert_eq!(
        employees
            .text_at(Row::new(2), EmployeeColumn::Email)
            .await
            .expect("cell"),
        "dina@shop.test"
    );
    assert_eq!(
        employees
            .text_at(Row::new(3), EmployeeColumn::Firstname)
            .await
            .expect("cell"),
        "Rafa"
    );
}

#[tokio::test]
async fn filter_then_reset_restores_full_count() {
    let (_model, employees) = setup();
    employees
        .filter(FilterKind::Input, EmployeeColumn::Email, "dina")
        .await
        .expect("filter");
    assert_eq!(employees.grid_row_count().await.expect("filtered count"), 1);
    assert_eq!(
        employees
            .text_at(Row::new(1), EmployeeColumn::Email)
            .await
            .expect("cell"),
        "dina@shop.test"
    );
    assert_eq!(employees.reset_and_count().await.expect("reset"), 3);
}

#[tokio::test]
async fn bulk_disable_then_enable_report_status_text() {
    let (model, employees) = setup();

    let message = employees.bulk_set_status(false).await.expect("bulk disable");
    assert!(message.contains(shell::SUCCESSFUL_UPDATE_MESSAGE));
    assert!(model
        .lock()
        .expect("model")
        .employees
        .iter()
        .all(|e| !e.active));
    assert!(!employees.status(Row::new(1)).await);

    let message = employees.bulk_set_status(true).await.expect("bulk enable");
    assert!(message.contains(shell::SUCCESSFUL_UPDATE_MESSAGE));
    assert!(employees.status(Row::new(1)).await);
    assert!(employees.status(Row::new(3)).await);
}

#[tokio::test]
async fn delete_row_confirms_through_modal() {
    let (model, employees) = setup();
    let message = employees.delete_employee(Row::new(1)).await.expect("delete");
    assert!(message.contains(shell::SUCCESSFUL_DELETE_MESSAGE));
    assert_eq!(employees.grid_row_count().await.expect("count"), 2);
    assert_eq!(model.lock().expect("model").employees.len(), 2);
    // The first row now shows the next employee.
    assert_eq!(
        employees
            .text_at(Row::new(1), EmployeeColumn::Email)
            .await
            .expect("cell"),
        "dina@shop.test"
    );
}

#[tokio::test]
async fn bulk_delete_accepts_confirm_dialog_and_empties_grid() {
    let (model, employees) = setup();
    let message = employees.bulk_delete().await.expect("bulk delete");
    assert!(message.contains(shell::SUCCESSFUL_MULTI_DELETE_MESSAGE));
    assert_eq!(employees.grid_row_count().await.expect("count"), 0);
    assert!(model.lock().expect("model").employees.is_empty());
}
