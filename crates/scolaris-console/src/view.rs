//! The table view engine
//!
//! [`TableView`] ties one record set to its columns, filters, pagination,
//! modal lifecycle, notifications and host callbacks. It is headless: the
//! host renders [`PageSnapshot`]s and forwards user intents, the view owns
//! every state transition in between.

use crate::actions::{ActionGuard, EntityActions};
use crate::modal::{ModalController, ModalState};
use crate::notifications::{Notice, NotificationCenter};
use parking_lot::{Mutex, RwLock};
use scolaris_client::ApiClient;
use scolaris_core::{
	ColumnSet, ConsoleError, ConsoleResult, FilterConfig, FilterSet, PageView, Paginator, RowKey,
	filters, identity,
};
use scolaris_interchange::export::{self, ExportConfig, ExportResult};
use scolaris_interchange::import::{ImportConfig, ImportPipeline};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Default page size when the builder does not set one
const DEFAULT_PAGE_SIZE: usize = 10;

/// Upload filename for confirmed import payloads
const IMPORT_UPLOAD_NAME: &str = "import.xlsx";

/// One rendered row of the current page
#[derive(Debug, Clone)]
pub struct RowSnapshot<T> {
	/// Resolved identity of the record
	pub key: RowKey,
	/// The record itself
	pub item: T,
}

/// One computed page of the view, cloned out for rendering
#[derive(Debug, Clone)]
pub struct PageSnapshot<T> {
	/// Records on the current page with their resolved keys, in input order
	pub rows: Vec<RowSnapshot<T>>,
	/// Current page, 1-indexed and clamped
	pub current_page: usize,
	/// Total number of pages; at least 1
	pub total_pages: usize,
	/// Number of filtered records across all pages
	pub total_items: usize,
	/// False on the first page
	pub has_prev: bool,
	/// False on the last page
	pub has_next: bool,
	/// Sliding window of page numbers centered on the current page
	pub window: Vec<usize>,
}

/// Per-action-kind in-flight guards
#[derive(Debug, Default)]
struct ActionGuards {
	create: ActionGuard,
	update: ActionGuard,
	delete: ActionGuard,
	import: ActionGuard,
	export: ActionGuard,
}

/// Builder for [`TableView`]
pub struct TableViewBuilder<T> {
	columns: ColumnSet<T>,
	data: Vec<T>,
	filter_configs: Vec<FilterConfig>,
	page_size: usize,
	actions: Option<Arc<dyn EntityActions<Record = T>>>,
	row_id: Option<Arc<dyn Fn(&T) -> RowKey + Send + Sync>>,
	import: Option<ImportConfig>,
	export: Option<ExportConfig>,
}

impl<T> TableViewBuilder<T>
where
	T: Serialize + Clone + Send + Sync + 'static,
{
	/// Seeds the initial record set
	pub fn with_data(mut self, data: Vec<T>) -> Self {
		self.data = data;
		self
	}

	/// Declares the dropdown filters offered by the view
	pub fn with_filters(mut self, configs: Vec<FilterConfig>) -> Self {
		self.filter_configs = configs;
		self
	}

	/// Sets the initial page size
	pub fn with_page_size(mut self, page_size: usize) -> Self {
		self.page_size = page_size;
		self
	}

	/// Supplies the CRUD callbacks; without them the view is read-only
	pub fn with_actions(mut self, actions: Arc<dyn EntityActions<Record = T>>) -> Self {
		self.actions = Some(actions);
		self
	}

	/// Supplies an explicit row identity accessor
	pub fn with_row_id<F>(mut self, accessor: F) -> Self
	where
		F: Fn(&T) -> RowKey + Send + Sync + 'static,
	{
		self.row_id = Some(Arc::new(accessor));
		self
	}

	/// Enables the spreadsheet import pipeline
	pub fn with_import(mut self, config: ImportConfig) -> Self {
		self.import = Some(config);
		self
	}

	/// Enables spreadsheet export
	pub fn with_export(mut self, config: ExportConfig) -> Self {
		self.export = Some(config);
		self
	}

	/// Builds the view
	pub fn build(self) -> TableView<T> {
		TableView {
			data: RwLock::new(self.data),
			columns: self.columns,
			filter_configs: self.filter_configs,
			filters: RwLock::new(FilterSet::new()),
			pending_search: RwLock::new(String::new()),
			applied_search: RwLock::new(String::new()),
			paginator: RwLock::new(Paginator::new(self.page_size)),
			modal: ModalController::new(),
			notifications: NotificationCenter::new(),
			actions: self.actions,
			row_id: self.row_id,
			import: self.import.map(|config| Mutex::new(ImportPipeline::new(config))),
			export: self.export,
			guards: ActionGuards::default(),
		}
	}
}

/// Headless console view over one record set
///
/// # Examples
///
/// ```rust
/// use scolaris_console::TableView;
/// use scolaris_core::{Column, ColumnSet, TextColumn};
/// use serde::Serialize;
///
/// #[derive(Debug, Clone, Serialize)]
/// struct Formation {
///     id: i64,
///     name: String,
/// }
///
/// let columns = ColumnSet::new(vec![
///     TextColumn::new("name", "Name", |f: &Formation| f.name.clone()).boxed(),
/// ]).unwrap();
///
/// let view = TableView::builder(columns)
///     .with_data(vec![Formation { id: 1, name: "Licence Informatique".into() }])
///     .build();
///
/// let page = view.visible_rows();
/// assert_eq!(page.total_items, 1);
/// assert_eq!(page.rows[0].item.name, "Licence Informatique");
/// ```
pub struct TableView<T> {
	data: RwLock<Vec<T>>,
	columns: ColumnSet<T>,
	filter_configs: Vec<FilterConfig>,
	filters: RwLock<FilterSet>,
	/// Text in the search box, not yet applied
	pending_search: RwLock<String>,
	/// Term the current result set was computed from
	applied_search: RwLock<String>,
	paginator: RwLock<Paginator>,
	modal: ModalController,
	notifications: NotificationCenter,
	actions: Option<Arc<dyn EntityActions<Record = T>>>,
	row_id: Option<Arc<dyn Fn(&T) -> RowKey + Send + Sync>>,
	import: Option<Mutex<ImportPipeline>>,
	export: Option<ExportConfig>,
	guards: ActionGuards,
}

impl<T> TableView<T>
where
	T: Serialize + Clone + Send + Sync + 'static,
{
	/// Starts building a view over the given column set
	pub fn builder(columns: ColumnSet<T>) -> TableViewBuilder<T> {
		TableViewBuilder {
			columns,
			data: Vec::new(),
			filter_configs: Vec::new(),
			page_size: DEFAULT_PAGE_SIZE,
			actions: None,
			row_id: None,
			import: None,
			export: None,
		}
	}

	/// Replaces the loaded record set
	///
	/// Called by the host after it refetches, typically following a create,
	/// update, delete or confirmed import. Presentation state (search,
	/// filters, page) is kept; the page clamps on the next render if the set
	/// shrank.
	pub fn set_data(&self, data: Vec<T>) {
		*self.data.write() = data;
	}

	/// Returns the column set
	pub fn columns(&self) -> &ColumnSet<T> {
		&self.columns
	}

	/// Returns the declared dropdown filters
	pub fn filter_configs(&self) -> &[FilterConfig] {
		&self.filter_configs
	}

	/// Returns the currently active filter selections
	pub fn active_filters(&self) -> FilterSet {
		self.filters.read().clone()
	}

	// ----- search -----

	/// Updates the search box text without recomputing the result set
	pub fn set_search_text(&self, text: impl Into<String>) {
		*self.pending_search.write() = text.into();
	}

	/// Returns the current search box text
	pub fn search_text(&self) -> String {
		self.pending_search.read().clone()
	}

	/// Applies the pending search term and resets to page 1
	pub fn submit_search(&self) {
		let pending = self.pending_search.read().clone();
		*self.applied_search.write() = pending;
		self.paginator.write().reset();
	}

	// ----- filters -----

	/// Selects a filter value and resets to page 1
	///
	/// Selecting the empty value clears the constraint for that key.
	pub fn set_filter(&self, key: impl Into<String>, value: impl Into<String>) {
		self.filters.write().set(key, value);
		self.paginator.write().reset();
	}

	/// Clears every filter selection and resets to page 1
	///
	/// The applied search term is untouched.
	pub fn clear_filters(&self) {
		self.filters.write().clear_all();
		self.paginator.write().reset();
	}

	// ----- pagination -----

	/// Moves to the given page, clamped to the filtered page count
	pub fn set_page(&self, page: usize) {
		let total = self.filtered_count();
		self.paginator.write().set_page(page, total);
	}

	/// Changes the page size and resets to page 1
	pub fn set_page_size(&self, page_size: usize) {
		self.paginator.write().set_per_page(page_size);
	}

	// ----- rendering -----

	/// Computes the current page of the filtered record set
	///
	/// Row keys resolve through the explicit accessor when one is configured,
	/// otherwise by probing conventional identifier fields; the positional
	/// fallback yields keys that are rejected as mutation targets.
	pub fn visible_rows(&self) -> PageSnapshot<T> {
		let data = self.data.read();
		let search = self.applied_search.read();
		let filters = self.filters.read();
		let paginator = self.paginator.read();

		let filtered = filters::apply(&data, &search, &filters);
		let page: PageView<'_, &T> = paginator.paginate(&filtered);

		let offset = (page.current_page - 1) * paginator.per_page();
		let rows = page
			.items
			.iter()
			.enumerate()
			.map(|(i, item)| RowSnapshot {
				key: identity::resolve_key(*item, offset + i, self.row_id.as_deref()),
				item: (*item).clone(),
			})
			.collect();

		PageSnapshot {
			rows,
			current_page: page.current_page,
			total_pages: page.total_pages,
			total_items: page.total_items,
			has_prev: page.has_prev,
			has_next: page.has_next,
			window: page.window,
		}
	}

	// ----- capabilities -----

	/// Whether the add action is offered
	pub fn can_add(&self) -> bool {
		self.actions.as_ref().is_some_and(|a| a.can_create())
	}

	/// Whether the edit action is offered
	pub fn can_edit(&self) -> bool {
		self.actions.as_ref().is_some_and(|a| a.can_update())
	}

	/// Whether the delete action is offered
	pub fn can_delete(&self) -> bool {
		self.actions.as_ref().is_some_and(|a| a.can_delete())
	}

	/// Whether the import pipeline is configured
	pub fn import_enabled(&self) -> bool {
		self.import.is_some()
	}

	/// Whether export is configured
	pub fn export_enabled(&self) -> bool {
		self.export.is_some()
	}

	// ----- modal lifecycle -----

	/// Returns the current overlay state
	pub fn modal(&self) -> ModalState {
		self.modal.current()
	}

	/// Drains pending outcome notices, oldest first
	pub fn drain_notices(&self) -> Vec<Notice> {
		self.notifications.drain()
	}

	/// Opens the add form
	pub fn open_add(&self) -> ConsoleResult<()> {
		if !self.can_add() {
			return Err(ConsoleError::Precondition(
				"adding records is not available".to_string(),
			));
		}
		self.modal.open_add();
		Ok(())
	}

	/// Opens the edit form for one row
	///
	/// Positional fallback keys are refused: they name a render position, not
	/// a record, and must never reach the backend.
	pub fn open_edit(&self, key: RowKey) -> ConsoleResult<()> {
		if !self.can_edit() {
			return Err(ConsoleError::Precondition(
				"editing records is not available".to_string(),
			));
		}
		if !key.is_mutation_target() {
			tracing::warn!(%key, "refusing to edit a row without a stable identifier");
			return Err(ConsoleError::Precondition(
				"record has no stable identifier".to_string(),
			));
		}
		self.modal.open_edit(key);
		Ok(())
	}

	/// Dismisses the current overlay
	///
	/// Dismissing the import preview also discards the preview buffer.
	pub fn close_modal(&self) {
		self.dismiss_overlay();
	}

	/// Handles the Escape key: dismisses the current overlay
	pub fn handle_escape(&self) {
		self.dismiss_overlay();
	}

	/// Handles a click on the modal backdrop: dismisses the current overlay
	pub fn handle_backdrop_click(&self) {
		self.dismiss_overlay();
	}

	fn dismiss_overlay(&self) {
		if self.modal.close() == ModalState::ImportPreviewOpen {
			if let Some(pipeline) = &self.import {
				pipeline.lock().cancel();
			}
		}
	}

	// ----- CRUD dispatch -----

	/// Submits the add form
	///
	/// On success the modal closes, the view returns to page 1 and one
	/// success notice is queued. On failure the modal stays open with the
	/// user's input intact, exactly one error notice is queued, and the
	/// error propagates.
	pub async fn submit_add(&self, record: T) -> ConsoleResult<()> {
		let actions = self.require_actions()?;
		let _permit = self.guards.create.try_begin().ok_or_else(|| {
			ConsoleError::Precondition("a create request is already in flight".to_string())
		})?;

		match actions.create(record).await {
			Ok(()) => {
				self.modal.close();
				self.paginator.write().reset();
				self.notifications.success("Record created");
				Ok(())
			}
			Err(err) => {
				tracing::error!(error = %err, "create failed");
				self.notifications.error(format!("Failed to create record: {}", err));
				Err(err)
			}
		}
	}

	/// Submits the edit form for one row
	///
	/// Same outcome handling as [`TableView::submit_add`].
	pub async fn submit_edit(&self, key: RowKey, record: T) -> ConsoleResult<()> {
		let actions = self.require_actions()?;
		if !key.is_mutation_target() {
			return Err(ConsoleError::Precondition(
				"record has no stable identifier".to_string(),
			));
		}
		let _permit = self.guards.update.try_begin().ok_or_else(|| {
			ConsoleError::Precondition("an update request is already in flight".to_string())
		})?;

		match actions.update(key, record).await {
			Ok(()) => {
				self.modal.close();
				self.paginator.write().reset();
				self.notifications.success("Record updated");
				Ok(())
			}
			Err(err) => {
				tracing::error!(error = %err, "update failed");
				self.notifications.error(format!("Failed to update record: {}", err));
				Err(err)
			}
		}
	}

	/// Deletes one row after the host has confirmed the intent
	///
	/// The loaded record set is never mutated optimistically: the row
	/// disappears only when the host refetches and calls
	/// [`TableView::set_data`].
	pub async fn confirm_delete(&self, key: RowKey) -> ConsoleResult<()> {
		let actions = self.require_actions()?;
		if !key.is_mutation_target() {
			tracing::warn!(%key, "refusing to delete a row without a stable identifier");
			return Err(ConsoleError::Precondition(
				"record has no stable identifier".to_string(),
			));
		}
		let _permit = self.guards.delete.try_begin().ok_or_else(|| {
			ConsoleError::Precondition("a delete request is already in flight".to_string())
		})?;

		match actions.delete(key).await {
			Ok(()) => {
				self.notifications.success("Record deleted");
				Ok(())
			}
			Err(err) => {
				tracing::error!(error = %err, "delete failed");
				self.notifications.error(format!("Failed to delete record: {}", err));
				Err(err)
			}
		}
	}

	// ----- import -----

	/// Feeds a selected file into the import pipeline
	///
	/// On success the preview overlay opens and the record count is returned.
	/// On failure the pipeline resets, one error notice is queued, and the
	/// current overlay is left as it was.
	pub fn begin_import(&self, bytes: &[u8]) -> ConsoleResult<usize> {
		let pipeline = self.require_import()?;
		match pipeline.lock().load_file(bytes) {
			Ok(count) => {
				self.modal.open_import_preview();
				Ok(count)
			}
			Err(err) => {
				self.notifications.error(format!("Import failed: {}", err));
				Err(err)
			}
		}
	}

	/// Discards the preview buffer and closes the preview overlay
	pub fn cancel_import(&self) {
		if let Some(pipeline) = &self.import {
			pipeline.lock().cancel();
		}
		if self.modal.current() == ModalState::ImportPreviewOpen {
			self.modal.close();
		}
	}

	/// Returns the resolved headers of the loaded import file
	pub fn import_headers(&self) -> Vec<String> {
		self.import
			.as_ref()
			.map(|p| p.lock().headers().to_vec())
			.unwrap_or_default()
	}

	/// Renders the preview buffer through the view's own columns
	///
	/// The preview table shows exactly what each record will look like once
	/// imported, using the same renderers as the live table.
	pub fn import_preview_rows(&self) -> ConsoleResult<Vec<Vec<String>>>
	where
		T: DeserializeOwned,
	{
		let pipeline = self.require_import()?;
		let records: Vec<T> = pipeline.lock().records()?;
		Ok(records
			.iter()
			.map(|record| self.columns.render_row(record))
			.collect())
	}

	/// Uploads the confirmed preview buffer to the import endpoint
	///
	/// The buffer is re-serialized into a workbook and posted as-is. On
	/// success the buffer clears, the overlay closes and a success notice is
	/// queued; the host then refetches. On failure the preview stays open
	/// with the buffer intact for retry.
	pub async fn confirm_import(&self, client: &ApiClient) -> ConsoleResult<()> {
		let pipeline = self.require_import()?;
		let _permit = self.guards.import.try_begin().ok_or_else(|| {
			ConsoleError::Precondition("an import is already in flight".to_string())
		})?;

		let (payload, api_url) = {
			let guard = pipeline.lock();
			let payload = match guard.confirm_payload() {
				Ok(payload) => payload,
				Err(err) => {
					self.notifications.error(format!("Import failed: {}", err));
					return Err(err);
				}
			};
			// confirm_payload already failed if no endpoint is configured
			let api_url = guard.config().api_url().unwrap_or_default().to_string();
			(payload, api_url)
		};

		match client.upload_workbook(&api_url, IMPORT_UPLOAD_NAME, payload).await {
			Ok(()) => {
				pipeline.lock().complete();
				if self.modal.current() == ModalState::ImportPreviewOpen {
					self.modal.close();
				}
				self.notifications.success("Import completed");
				Ok(())
			}
			Err(err) => {
				tracing::error!(error = %err, "import upload failed");
				self.notifications.error(format!("Import failed: {}", err));
				Err(err)
			}
		}
	}

	/// Builds the header-only template workbook for offline fill-in
	pub fn import_template(&self) -> ConsoleResult<Vec<u8>> {
		let pipeline = self.require_import()?;
		let headers = pipeline.lock().config().headers().to_vec();
		export::export_template(&headers)
	}

	// ----- export -----

	/// Produces the export file
	///
	/// With an endpoint configured the server-built workbook is downloaded
	/// and its row count read back from the payload; otherwise the full
	/// loaded record set is serialized locally. The current search, filters
	/// and page never narrow an export.
	pub async fn export(&self, client: &ApiClient) -> ConsoleResult<ExportResult> {
		let config = self.export.as_ref().ok_or_else(|| {
			ConsoleError::Precondition("export is not configured".to_string())
		})?;
		let _permit = self.guards.export.try_begin().ok_or_else(|| {
			ConsoleError::Precondition("an export is already in flight".to_string())
		})?;

		let result = if let Some(api_url) = config.api_url() {
			match client.download_workbook(api_url).await {
				Ok(data) => {
					let row_count = export::exported_row_count(config.format(), &data);
					Ok(ExportResult {
						data,
						mime_type: config.format().mime_type().to_string(),
						filename: config.download_name(),
						row_count,
					})
				}
				Err(err) => Err(err),
			}
		} else {
			let data = self.data.read();
			export::export_records(config, &self.columns, &data)
		};

		match result {
			Ok(result) => {
				self.notifications
					.success(format!("Exported {}", result.filename));
				Ok(result)
			}
			Err(err) => {
				tracing::error!(error = %err, "export failed");
				self.notifications.error(format!("Export failed: {}", err));
				Err(err)
			}
		}
	}

	// ----- internals -----

	fn filtered_count(&self) -> usize {
		let data = self.data.read();
		let search = self.applied_search.read();
		let filters = self.filters.read();
		filters::apply(&data, &search, &filters).len()
	}

	fn require_actions(&self) -> ConsoleResult<Arc<dyn EntityActions<Record = T>>> {
		self.actions.clone().ok_or_else(|| {
			ConsoleError::Precondition("no entity actions are configured".to_string())
		})
	}

	fn require_import(&self) -> ConsoleResult<&Mutex<ImportPipeline>> {
		self.import.as_ref().ok_or_else(|| {
			ConsoleError::Precondition("import is not configured".to_string())
		})
	}
}

impl<T> std::fmt::Debug for TableView<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TableView")
			.field("columns", &self.columns.len())
			.field("modal", &self.modal.current())
			.finish_non_exhaustive()
	}
}
