//! An in-memory table service speaking the same REST dialect as the hosted
//! data service: `GET`/`POST /rest/v1/{table}`, `select` with embedded
//! relations, `apikey` authentication and JSON error bodies.

use std::collections::{HashMap, VecDeque};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use actix_web::dev::Server;
use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use payloads::tables;
use serde::Deserialize;
use serde_json::{Map, Value, json};

/// Rows of every table, keyed by table name.
pub struct TableStore {
    inner: Mutex<StoreInner>,
}

struct StoreInner {
    tables: HashMap<String, Table>,
    failures: VecDeque<(StatusCode, String)>,
}

struct Table {
    rows: Vec<Value>,
    next_id: i64,
    /// Columns that must hold distinct values across rows.
    unique: &'static [&'static str],
}

impl Table {
    fn new(unique: &'static [&'static str]) -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
            unique,
        }
    }
}

impl Default for TableStore {
    fn default() -> Self {
        let tables = HashMap::from([
            (tables::COURTS.to_string(), Table::new(&["slug"])),
            (tables::BOOKING_TYPES.to_string(), Table::new(&["name"])),
            (tables::BOOKINGS.to_string(), Table::new(&[])),
        ]);
        Self {
            inner: Mutex::new(StoreInner {
                tables,
                failures: VecDeque::new(),
            }),
        }
    }
}

impl TableStore {
    /// Answer the next request with `status` and `message` instead of
    /// serving it.
    pub fn fail_next(&self, status: u16, message: impl Into<String>) {
        let status = StatusCode::from_u16(status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self.lock().failures.push_back((status, message.into()));
    }

    /// Snapshot of the stored rows of `table`, without embedded relations.
    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.lock()
            .tables
            .get(table)
            .map(|t| t.rows.clone())
            .unwrap_or_default()
    }

    /// Store a row as-is, bypassing id assignment and constraints. Useful
    /// for seeding rows the service itself would never produce.
    pub fn insert_raw(&self, table: &str, row: Value) {
        if let Some(t) = self.lock().tables.get_mut(table) {
            t.rows.push(row);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreInner> {
        // A panicking handler only poisons test state; keep serving.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn take_failure(&self) -> Option<(StatusCode, String)> {
        self.lock().failures.pop_front()
    }

    fn list(&self, table: &str, select: &Select) -> Option<Vec<Value>> {
        let inner = self.lock();
        let rows = &inner.tables.get(table)?.rows;
        Some(rows.iter().map(|row| select.apply(row, &inner)).collect())
    }

    fn insert(
        &self,
        table: &str,
        row: Map<String, Value>,
    ) -> Result<Value, ServiceFailure> {
        let mut inner = self.lock();
        let t = inner
            .tables
            .get_mut(table)
            .ok_or_else(|| ServiceFailure::unknown_table(table))?;

        for column in t.unique {
            let Some(value) = row.get(*column) else {
                continue;
            };
            if t.rows.iter().any(|r| r.get(*column) == Some(value)) {
                return Err(ServiceFailure {
                    status: StatusCode::CONFLICT,
                    code: "23505",
                    message: format!(
                        "duplicate key value violates unique constraint \
                         \"{table}_{column}_key\""
                    ),
                });
            }
        }

        let mut row = row;
        let id = t.next_id;
        t.next_id += 1;
        row.insert("id".into(), json!(id));
        row.entry("created_at")
            .or_insert_with(|| json!(jiff::Timestamp::now().to_string()));
        let row = Value::Object(row);
        t.rows.push(row.clone());
        Ok(row)
    }
}

struct ServiceFailure {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ServiceFailure {
    fn unknown_table(table: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            code: "PGRST205",
            message: format!(
                "Could not find the table 'public.{table}' in the schema cache"
            ),
        }
    }

    fn response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(json!({
            "code": self.code,
            "message": self.message,
            "details": null,
            "hint": null,
        }))
    }
}

/// A parsed `select` parameter: plain columns and embedded relations.
#[derive(Debug, PartialEq)]
struct Select {
    all_columns: bool,
    columns: Vec<String>,
    embeds: Vec<Embed>,
}

/// `alias:table(*)`, resolved through the `<alias>_id` column.
#[derive(Debug, PartialEq)]
struct Embed {
    alias: String,
    table: String,
}

impl Select {
    fn parse(select: &str) -> Self {
        let mut parsed = Select {
            all_columns: false,
            columns: Vec::new(),
            embeds: Vec::new(),
        };
        for item in split_top_level(select) {
            let item = item.trim();
            if item.is_empty() {
                continue;
            }
            if item == "*" {
                parsed.all_columns = true;
            } else if let Some(open) = item.find('(') {
                let head = &item[..open];
                let (alias, table) = match head.split_once(':') {
                    Some((alias, table)) => (alias, table),
                    None => (head, head),
                };
                parsed.embeds.push(Embed {
                    alias: alias.trim().to_string(),
                    table: table.trim().to_string(),
                });
            } else {
                parsed.columns.push(item.to_string());
            }
        }
        parsed
    }

    fn apply(&self, row: &Value, store: &StoreInner) -> Value {
        let Some(fields) = row.as_object() else {
            return row.clone();
        };
        let mut out = if self.all_columns {
            fields.clone()
        } else {
            fields
                .iter()
                .filter(|(k, _)| self.columns.iter().any(|c| c == *k))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect()
        };
        for embed in &self.embeds {
            let related = fields
                .get(&format!("{}_id", embed.alias))
                .filter(|id| !id.is_null())
                .and_then(|id| {
                    store.tables.get(&embed.table)?.rows.iter().find(|r| {
                        r.get("id") == Some(id)
                    })
                })
                .cloned()
                .unwrap_or(Value::Null);
            out.insert(embed.alias.clone(), related);
        }
        Value::Object(out)
    }
}

impl Default for Select {
    fn default() -> Self {
        Self::parse("*")
    }
}

/// Split on commas that are not nested inside parentheses.
fn split_top_level(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);
    parts
}

#[derive(Clone)]
pub struct ApiKey(pub String);

#[derive(Deserialize)]
struct ListQuery {
    select: Option<String>,
}

/// Reject requests without the expected `apikey` header, and serve any
/// pending injected failure.
fn gatekeep(
    req: &HttpRequest,
    key: &ApiKey,
    store: &TableStore,
) -> Option<HttpResponse> {
    let presented = req
        .headers()
        .get("apikey")
        .and_then(|v| v.to_str().ok());
    if presented != Some(key.0.as_str()) {
        return Some(HttpResponse::Unauthorized().json(json!({
            "message": "Invalid API key",
            "hint": "Double check your `anon` or `service_role` API key.",
        })));
    }
    store.take_failure().map(|(status, message)| {
        HttpResponse::build(status).json(json!({ "message": message }))
    })
}

async fn list_rows(
    req: HttpRequest,
    table: web::Path<String>,
    query: web::Query<ListQuery>,
    store: web::Data<TableStore>,
    key: web::Data<ApiKey>,
) -> HttpResponse {
    if let Some(response) = gatekeep(&req, &key, &store) {
        return response;
    }
    let select = query
        .select
        .as_deref()
        .map(Select::parse)
        .unwrap_or_default();
    match store.list(&table, &select) {
        Some(rows) => HttpResponse::Ok().json(rows),
        None => ServiceFailure::unknown_table(&table).response(),
    }
}

async fn insert_rows(
    req: HttpRequest,
    table: web::Path<String>,
    body: web::Json<Value>,
    store: web::Data<TableStore>,
    key: web::Data<ApiKey>,
) -> HttpResponse {
    if let Some(response) = gatekeep(&req, &key, &store) {
        return response;
    }
    let objects = match body.into_inner() {
        Value::Object(row) => vec![row],
        Value::Array(rows) => {
            let mut objects = Vec::with_capacity(rows.len());
            for row in rows {
                match row {
                    Value::Object(row) => objects.push(row),
                    _ => return bad_payload(),
                }
            }
            objects
        }
        _ => return bad_payload(),
    };

    let mut inserted = Vec::with_capacity(objects.len());
    for row in objects {
        match store.insert(&table, row) {
            Ok(row) => inserted.push(row),
            Err(failure) => return failure.response(),
        }
    }
    tracing::debug!(table = %table, count = inserted.len(), "inserted rows");

    let wants_rows = req
        .headers()
        .get("Prefer")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("return=representation"));
    if wants_rows {
        HttpResponse::Created().json(inserted)
    } else {
        HttpResponse::Created().finish()
    }
}

fn bad_payload() -> HttpResponse {
    ServiceFailure {
        status: StatusCode::BAD_REQUEST,
        code: "PGRST102",
        message: "Invalid body, expected an object or an array of objects"
            .into(),
    }
    .response()
}

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to.
pub fn build(
    port: u16,
    store: Arc<TableStore>,
    api_key: ApiKey,
) -> std::io::Result<(Server, u16)> {
    let store = web::Data::from(store);
    let api_key = web::Data::new(api_key);

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("127.0.0.1:{port}"))?;
    let port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .app_data(api_key.clone())
            .service(
                web::resource("/rest/v1/{table}")
                    .route(web::get().to(list_rows))
                    .route(web::post().to(insert_rows)),
            )
    })
    .workers(1)
    .listen(listener)?
    .run();
    Ok((server, port))
}
