//! List Synchronization Tests
//!
//! Drives the generic controller against an in-memory API that behaves like
//! the REST server: it assigns ids, fills server defaults and keeps
//! insertion order.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use stockboard_core::{
    load_report, ApiError, ApiResult, DashboardState, DraftForm, Health, ListController, ListState,
    NewProduct, NewSetting, NewTask, Product, ProductForm, RecordId, Refresh, Report, ReportsApi,
    Resource, Setting, SettingForm, Status, StatusApi, StatusResource, SubmitError, Task, TaskForm,
    ValidationError,
};

/// Records the fake server can create from a POST body
trait Mint: Resource {
    fn mint(id: RecordId, draft: &Self::Draft) -> Self;
    fn set_status(&mut self, _status: Status) {}
}

impl Mint for Product {
    fn mint(id: RecordId, draft: &NewProduct) -> Self {
        Product {
            id,
            product_name: draft.product_name.clone(),
            price: draft.price,
            quantity: draft.quantity,
            priority: draft.priority.clone(),
            due_date: draft.due_date.clone(),
            status: Status::Pending,
        }
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}

impl Mint for Task {
    fn mint(id: RecordId, draft: &NewTask) -> Self {
        Task {
            id,
            title: draft.title.clone(),
            description: Some(draft.description.clone()),
            priority: draft.priority.clone(),
            status: Status::Pending,
            created_at: "2024-05-01 09:30:00".to_string(),
        }
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}

impl Mint for Setting {
    fn mint(id: RecordId, draft: &NewSetting) -> Self {
        Setting {
            id,
            name: draft.name.clone(),
            value: draft.value.clone(),
        }
    }
}

struct Server<R> {
    records: Vec<R>,
    next_id: RecordId,
    calls: Vec<String>,
    down: bool,
    /// When set, every list call waits until the test releases it
    gated: bool,
    pending: VecDeque<oneshot::Sender<Vec<R>>>,
}

#[derive(Clone)]
struct MemoryApi<R> {
    server: Rc<RefCell<Server<R>>>,
}

impl<R: Mint> MemoryApi<R> {
    fn new() -> Self {
        Self {
            server: Rc::new(RefCell::new(Server {
                records: Vec::new(),
                next_id: 1,
                calls: Vec::new(),
                down: false,
                gated: false,
                pending: VecDeque::new(),
            })),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.server.borrow().calls.clone()
    }

    fn check(&self, call: String) -> ApiResult<()> {
        let mut server = self.server.borrow_mut();
        server.calls.push(call);
        if server.down {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        Ok(())
    }

    fn missing(id: RecordId) -> ApiError {
        ApiError::Status {
            method: "DELETE",
            path: format!("{}/{}", R::PATH, id),
            status: 404,
            reason: "NOT FOUND".to_string(),
        }
    }
}

#[async_trait(?Send)]
impl<R: Mint> stockboard_core::ResourceApi<R> for MemoryApi<R> {
    async fn list(&self) -> ApiResult<Vec<R>> {
        self.check(format!("GET /{}", R::PATH))?;
        let gate = {
            let mut server = self.server.borrow_mut();
            if server.gated {
                let (tx, rx) = oneshot::channel();
                server.pending.push_back(tx);
                Some(rx)
            } else {
                None
            }
        };
        match gate {
            Some(rx) => rx.await.map_err(|_| ApiError::Network("dropped".to_string())),
            None => Ok(self.server.borrow().records.clone()),
        }
    }

    async fn create(&self, draft: &R::Draft) -> ApiResult<()> {
        self.check(format!("POST /{}", R::PATH))?;
        let mut server = self.server.borrow_mut();
        let id = server.next_id;
        server.next_id += 1;
        server.records.push(R::mint(id, draft));
        Ok(())
    }

    async fn delete(&self, id: RecordId) -> ApiResult<()> {
        self.check(format!("DELETE /{}/{}", R::PATH, id))?;
        let mut server = self.server.borrow_mut();
        let before = server.records.len();
        server.records.retain(|r| r.id() != id);
        if server.records.len() == before {
            return Err(Self::missing(id));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl<R: Mint + StatusResource> StatusApi<R> for MemoryApi<R> {
    async fn patch_status(&self, id: RecordId, status: &Status) -> ApiResult<()> {
        self.check(format!("PATCH /{}/{}", R::PATH, id))?;
        let mut server = self.server.borrow_mut();
        match server.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                record.set_status(status.clone());
                Ok(())
            }
            None => Err(Self::missing(id)),
        }
    }
}

type Store<R> = Rc<RefCell<ListState<R>>>;

fn controller<R: Mint>() -> (ListController<R, MemoryApi<R>, Store<R>>, MemoryApi<R>) {
    let api = MemoryApi::new();
    let store = Rc::new(RefCell::new(ListState::new()));
    (ListController::new(api.clone(), store), api)
}

fn labels<R: Mint>(ctrl: &ListController<R, MemoryApi<R>, Store<R>>) -> Vec<String> {
    ctrl.store().borrow().rows().into_iter().map(|r| r.label).collect()
}

fn widget_form() -> ProductForm {
    ProductForm {
        product_name: "Widget".to_string(),
        price: "9.99".to_string(),
        quantity: "3".to_string(),
        priority: "High".to_string(),
        due_date: String::new(),
    }
}

#[tokio::test]
async fn test_create_appears_once_after_refresh() {
    let (ctrl, api) = controller::<Product>();

    let mut cleared = false;
    let outcome = ctrl.submit(&widget_form(), || cleared = true).await.expect("submit failed");
    assert_eq!(outcome, Refresh::Applied(1));
    assert!(cleared);

    let rows = ctrl.store().borrow().rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].label, "Widget | $9.99 | Qty: 3 | Priority: High | Due: -");
    assert_eq!(rows[0].status, Some(Status::Pending));
    assert!(!rows[0].completed());

    assert_eq!(api.calls(), vec!["POST /products", "GET /products"]);
}

#[tokio::test]
async fn test_create_from_draft_refreshes() {
    let (ctrl, api) = controller::<Setting>();
    let draft = NewSetting { name: "currency".to_string(), value: "USD".to_string() };

    assert_eq!(ctrl.create(&draft).await, Ok(Refresh::Applied(1)));
    assert_eq!(labels(&ctrl), vec!["currency: USD"]);
    assert_eq!(api.calls(), vec!["POST /settings", "GET /settings"]);
}

#[tokio::test]
async fn test_invalid_submit_makes_no_request() {
    let (ctrl, api) = controller::<Product>();
    ctrl.submit(&widget_form(), || ()).await.unwrap();
    let before = labels(&ctrl);

    let mut form = widget_form();
    form.price = "twelve".to_string();
    let err = ctrl.submit(&form, || panic!("created an invalid product")).await.unwrap_err();
    assert_eq!(err, SubmitError::Invalid(ValidationError::IncompleteProduct));

    let mut form = widget_form();
    form.product_name.clear();
    assert!(ctrl.submit(&form, || ()).await.is_err());

    assert_eq!(api.calls().len(), 2);
    assert_eq!(labels(&ctrl), before);
}

#[tokio::test]
async fn test_delete_removes_row() {
    let (ctrl, _api) = controller::<Setting>();
    for (name, value) in [("currency", "USD"), ("theme", "dark")] {
        let form = SettingForm { name: name.to_string(), value: value.to_string() };
        ctrl.submit(&form, || ()).await.unwrap();
    }
    assert!(ctrl.store().borrow().contains(1));

    assert_eq!(ctrl.remove(1).await, Ok(Refresh::Applied(1)));
    assert!(!ctrl.store().borrow().contains(1));
    assert_eq!(labels(&ctrl), vec!["theme: dark"]);
}

#[tokio::test]
async fn test_status_change_drives_completed_style() {
    let (ctrl, _api) = controller::<Product>();
    ctrl.submit(&widget_form(), || ()).await.unwrap();

    ctrl.set_status(1, Status::Completed).await.unwrap();
    let row = ctrl.store().borrow().rows().remove(0);
    assert_eq!(row.status, Some(Status::Completed));
    assert_eq!(row.class(), "record-row completed");

    ctrl.set_status(1, Status::InProgress).await.unwrap();
    let row = ctrl.store().borrow().rows().remove(0);
    assert_eq!(row.status, Some(Status::InProgress));
    assert_eq!(row.class(), "record-row");
}

#[tokio::test]
async fn test_task_create_complete_delete() {
    let (ctrl, api) = controller::<Task>();
    let form = TaskForm { title: "Restock".to_string(), ..TaskForm::default() };

    assert_eq!(ctrl.submit(&form, || ()).await, Ok(Refresh::Applied(1)));
    assert_eq!(
        labels(&ctrl),
        vec!["Restock | - | Priority: Medium | Created: 2024-05-01 09:30:00"]
    );

    ctrl.set_status(1, Status::Completed).await.unwrap();
    let row = ctrl.store().borrow().rows().remove(0);
    assert_eq!(row.status, Some(Status::Completed));
    assert_eq!(row.class(), "record-row completed");

    assert_eq!(ctrl.remove(1).await, Ok(Refresh::Applied(0)));
    assert!(!ctrl.store().borrow().contains(1));
    assert_eq!(
        api.calls(),
        vec![
            "POST /tasks",
            "GET /tasks",
            "PATCH /tasks/1",
            "GET /tasks",
            "DELETE /tasks/1",
            "GET /tasks",
        ]
    );
}

#[tokio::test]
async fn test_repeated_fetches_are_identical() {
    let (ctrl, _api) = controller::<Setting>();
    for name in ["b", "a", "c"] {
        let mut form = SettingForm::default();
        form.name = name.to_string();
        form.value = "1".to_string();
        ctrl.submit(&form, || ()).await.unwrap();
        form.reset();
        assert_eq!(form, SettingForm::default());
    }

    ctrl.refresh().await.unwrap();
    let first = ctrl.store().borrow().rows();
    ctrl.refresh().await.unwrap();
    assert_eq!(ctrl.store().borrow().rows(), first);
    assert_eq!(labels(&ctrl), vec!["b: 1", "a: 1", "c: 1"]);
}

#[tokio::test]
async fn test_failed_mutation_keeps_last_render() {
    let (ctrl, api) = controller::<Setting>();
    ctrl.submit(&SettingForm { name: "a".to_string(), value: "1".to_string() }, || ())
        .await
        .unwrap();

    api.server.borrow_mut().down = true;
    let err = ctrl.remove(1).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(labels(&ctrl), vec!["a: 1"]);
    assert!(!ctrl.store().borrow().is_loading());

    // no refresh is attempted after a failed write
    assert_eq!(api.calls().last().map(String::as_str), Some("DELETE /settings/1"));
}

#[tokio::test]
async fn test_failed_refresh_returns_to_idle() {
    let (ctrl, api) = controller::<Setting>();
    api.server.borrow_mut().down = true;
    assert!(ctrl.refresh().await.is_err());
    assert!(!ctrl.store().borrow().is_loading());
}

#[tokio::test]
async fn test_delete_of_unknown_id_reports_status() {
    let (ctrl, _api) = controller::<Setting>();
    let err = ctrl.remove(42).await.unwrap_err();
    assert_eq!(err.to_string(), "DELETE settings/42 failed: HTTP 404 NOT FOUND");
}

#[tokio::test]
async fn test_late_stale_response_is_discarded() {
    let (ctrl, api) = controller::<Setting>();
    api.server.borrow_mut().gated = true;

    let old = vec![Setting { id: 1, name: "old".to_string(), value: "1".to_string() }];
    let new = vec![Setting { id: 2, name: "new".to_string(), value: "2".to_string() }];

    let release = async {
        let (first, second) = {
            let mut server = api.server.borrow_mut();
            let first = server.pending.pop_front().expect("first fetch not issued");
            let second = server.pending.pop_front().expect("second fetch not issued");
            (first, second)
        };
        // newer request resolves first, older one straggles in afterwards
        second.send(new.clone()).unwrap();
        tokio::task::yield_now().await;
        first.send(old.clone()).unwrap();
    };

    let (first, second, ()) = futures::join!(ctrl.refresh(), ctrl.refresh(), release);

    assert_eq!(second, Ok(Refresh::Applied(1)));
    assert_eq!(first, Ok(Refresh::Stale));
    assert_eq!(ctrl.store().borrow().records(), new.as_slice());
    assert!(!ctrl.store().borrow().is_loading());
}

struct FixedReports(Report);

#[async_trait(?Send)]
impl ReportsApi for FixedReports {
    async fn report(&self) -> ApiResult<Report> {
        Ok(self.0)
    }

    async fn health(&self) -> ApiResult<Health> {
        Ok(Health { message: "Server is running".to_string() })
    }
}

#[tokio::test]
async fn test_dashboard_shows_server_numbers_in_order() {
    let api = FixedReports(Report {
        total_products: 5,
        completed_products: 2,
        total_tasks: 3,
        completed_tasks: 1,
    });
    let store = RefCell::new(DashboardState::default());

    assert_eq!(load_report(&api, &store).await, Ok(Refresh::Applied(4)));
    let state = store.borrow();
    let numbers: Vec<u64> = state.report().unwrap().summary().iter().map(|(_, n)| *n).collect();
    assert_eq!(numbers, vec![5, 2, 3, 1]);
    assert_eq!(api.health().await.unwrap().message, "Server is running");
}
