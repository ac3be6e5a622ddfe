#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod tests {
    use axum::{
        Json, Router,
        extract::{Path, Query, State},
        http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header::LOCATION},
        response::{IntoResponse, Response},
        routing::get,
    };
    use serde_json::{Map, Value};
    use std::{
        collections::{BTreeMap, HashMap},
        net::SocketAddr,
        sync::{
            Arc, Mutex,
            atomic::{AtomicBool, AtomicUsize, Ordering},
        },
    };

    use crate::ApiClient;

    pub const TEST_APP_NAME: &str = "torneoApp";

    #[derive(Default)]
    struct FakeState {
        resources: Mutex<HashMap<String, BTreeMap<i64, Value>>>,
        fail_mutations: AtomicBool,
        requests: AtomicUsize,
    }

    /// In-process REST backend answering like the real one: same routes,
    /// same `X-<app>-*` headers and the same id checks on create/update.
    pub struct FakeBackend {
        addr: SocketAddr,
        state: Arc<FakeState>,
    }

    impl FakeBackend {
        pub async fn spawn() -> Self {
            let state = Arc::new(FakeState::default());
            let router = Router::new()
                .route("/api/ganadoresDeJuego", get(winners_of_game))
                .route("/api/partidasGanadas", get(matches_won_by))
                .route("/api/{resource}", get(list).post(create))
                .route("/api/{resource}/count", get(count))
                .route(
                    "/api/{resource}/{id}",
                    get(find).put(update).patch(partial_update).delete(remove),
                )
                .with_state(state.clone());

            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind fake backend");
            let addr = listener.local_addr().expect("fake backend address");
            tokio::spawn(async move {
                axum::serve(listener, router).await.ok();
            });

            Self { addr, state }
        }

        pub fn url(&self) -> String {
            format!("http://{}", self.addr)
        }

        pub fn client(&self) -> ApiClient {
            ApiClient::with_client(reqwest::Client::new(), &self.url(), TEST_APP_NAME)
        }

        /// Makes every create/update/delete answer 500 while `fail` is set.
        pub fn fail_mutations(&self, fail: bool) {
            self.state.fail_mutations.store(fail, Ordering::SeqCst);
        }

        /// Number of requests received so far.
        pub fn requests(&self) -> usize {
            self.state.requests.load(Ordering::SeqCst)
        }

        /// Stores `value` as is, returning the id it was stored under.
        pub fn seed(&self, resource: &str, mut value: Value) -> i64 {
            let mut resources = self.state.resources.lock().unwrap();
            let store = resources.entry(resource.to_string()).or_default();
            let id = next_id(store);
            value["id"] = Value::from(id);
            store.insert(id, value);
            id
        }

        pub fn get(&self, resource: &str, id: i64) -> Option<Value> {
            let resources = self.state.resources.lock().unwrap();
            resources.get(resource).and_then(|store| store.get(&id).cloned())
        }
    }

    fn entity_name(resource: &str) -> Option<&'static str> {
        match resource {
            "partidas" => Some("partida"),
            "jugadors" => Some("jugador"),
            _ => None,
        }
    }

    fn next_id(store: &BTreeMap<i64, Value>) -> i64 {
        store.keys().next_back().copied().unwrap_or(0) + 1
    }

    fn header(suffix: &str, value: &str) -> (HeaderName, HeaderValue) {
        let name = format!("x-{}-{}", TEST_APP_NAME, suffix).to_lowercase();
        (
            HeaderName::try_from(name).expect("valid header name"),
            HeaderValue::from_str(value).expect("valid header value"),
        )
    }

    fn alert(message: String, param: i64) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in [header("alert", &message), header("params", &param.to_string())] {
            headers.insert(name, value);
        }
        headers
    }

    fn bad_request(entity: &str, key: &str) -> Response {
        let mut headers = HeaderMap::new();
        for (name, value) in [
            header("error", &format!("error.{}", key)),
            header("params", entity),
        ] {
            headers.insert(name, value);
        }
        (StatusCode::BAD_REQUEST, headers).into_response()
    }

    fn id_of(value: &Value) -> Option<i64> {
        value.get("id").and_then(Value::as_i64)
    }

    /// Checks shared by every mutation; `None` means the request may proceed.
    fn reject(state: &FakeState, resource: &str) -> Option<Response> {
        state.requests.fetch_add(1, Ordering::SeqCst);
        if entity_name(resource).is_none() {
            return Some(StatusCode::NOT_FOUND.into_response());
        }
        if state.fail_mutations.load(Ordering::SeqCst) {
            return Some(StatusCode::INTERNAL_SERVER_ERROR.into_response());
        }
        None
    }

    async fn create(
        State(state): State<Arc<FakeState>>,
        Path(resource): Path<String>,
        Json(mut body): Json<Value>,
    ) -> Response {
        if let Some(rejection) = reject(&state, &resource) {
            return rejection;
        }
        let entity = entity_name(&resource).unwrap_or_default();
        if id_of(&body).is_some() {
            return bad_request(entity, "idexists");
        }

        let mut resources = state.resources.lock().unwrap();
        let store = resources.entry(resource.clone()).or_default();
        let id = next_id(store);
        body["id"] = Value::from(id);
        store.insert(id, body.clone());

        let mut headers = alert(
            format!("A new {} is created with identifier {}", entity, id),
            id,
        );
        headers.insert(
            LOCATION,
            HeaderValue::from_str(&format!("/api/{}/{}", resource, id)).expect("valid location"),
        );
        (StatusCode::CREATED, headers, Json(body)).into_response()
    }

    async fn update(
        State(state): State<Arc<FakeState>>,
        Path((resource, id)): Path<(String, i64)>,
        Json(body): Json<Value>,
    ) -> Response {
        store_update(&state, &resource, id, body, false)
    }

    async fn partial_update(
        State(state): State<Arc<FakeState>>,
        Path((resource, id)): Path<(String, i64)>,
        body: String,
    ) -> Response {
        match serde_json::from_str::<Value>(&body) {
            Ok(body) => store_update(&state, &resource, id, body, true),
            Err(_) => StatusCode::BAD_REQUEST.into_response(),
        }
    }

    fn store_update(state: &FakeState, resource: &str, id: i64, body: Value, merge: bool) -> Response {
        if let Some(rejection) = reject(state, resource) {
            return rejection;
        }
        let entity = entity_name(resource).unwrap_or_default();
        match id_of(&body) {
            None => return bad_request(entity, "idnull"),
            Some(body_id) if body_id != id => return bad_request(entity, "idinvalid"),
            Some(_) => {}
        }

        let mut resources = state.resources.lock().unwrap();
        let store = resources.entry(resource.to_string()).or_default();
        let Some(current) = store.get_mut(&id) else {
            return bad_request(entity, "idnotfound");
        };

        if merge {
            if let (Value::Object(current), Value::Object(patch)) = (&mut *current, body) {
                for (key, value) in patch.into_iter().filter(|(_, v)| !v.is_null()) {
                    current.insert(key, value);
                }
            }
        } else {
            *current = body;
        }

        let headers = alert(format!("A {} is updated with identifier {}", entity, id), id);
        (StatusCode::OK, headers, Json(current.clone())).into_response()
    }

    async fn find(
        State(state): State<Arc<FakeState>>,
        Path((resource, id)): Path<(String, i64)>,
    ) -> Response {
        state.requests.fetch_add(1, Ordering::SeqCst);
        let resources = state.resources.lock().unwrap();
        match resources.get(&resource).and_then(|store| store.get(&id)) {
            Some(value) => Json(value.clone()).into_response(),
            None => StatusCode::NOT_FOUND.into_response(),
        }
    }

    async fn list(State(state): State<Arc<FakeState>>, Path(resource): Path<String>) -> Response {
        state.requests.fetch_add(1, Ordering::SeqCst);
        if entity_name(&resource).is_none() {
            return StatusCode::NOT_FOUND.into_response();
        }
        let resources = state.resources.lock().unwrap();
        let values: Vec<Value> = resources
            .get(&resource)
            .map(|store| store.values().cloned().collect())
            .unwrap_or_default();
        Json(values).into_response()
    }

    async fn count(State(state): State<Arc<FakeState>>, Path(resource): Path<String>) -> Response {
        state.requests.fetch_add(1, Ordering::SeqCst);
        let resources = state.resources.lock().unwrap();
        let count = resources.get(&resource).map(BTreeMap::len).unwrap_or(0) as u64;
        Json(count).into_response()
    }

    async fn remove(
        State(state): State<Arc<FakeState>>,
        Path((resource, id)): Path<(String, i64)>,
    ) -> Response {
        if let Some(rejection) = reject(&state, &resource) {
            return rejection;
        }
        let entity = entity_name(&resource).unwrap_or_default();
        let mut resources = state.resources.lock().unwrap();
        if let Some(store) = resources.get_mut(&resource) {
            store.remove(&id);
        }
        let headers = alert(format!("A {} is deleted with identifier {}", entity, id), id);
        (StatusCode::NO_CONTENT, headers).into_response()
    }

    fn partidas_sorted_by_winner(state: &FakeState, filter: impl Fn(&Map<String, Value>) -> bool) -> Vec<Value> {
        let resources = state.resources.lock().unwrap();
        let mut partidas: Vec<Value> = resources
            .get("partidas")
            .map(|store| {
                store
                    .values()
                    .filter(|v| v.as_object().is_some_and(&filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        partidas.sort_by(|a, b| {
            let a = a.get("ganador").and_then(Value::as_str).unwrap_or_default();
            let b = b.get("ganador").and_then(Value::as_str).unwrap_or_default();
            a.cmp(b)
        });
        partidas
    }

    /// Matches carry no game here, so every match belongs to every game.
    async fn winners_of_game(
        State(state): State<Arc<FakeState>>,
        Query(params): Query<HashMap<String, String>>,
    ) -> Response {
        state.requests.fetch_add(1, Ordering::SeqCst);
        if !params.contains_key("nombre") {
            return (StatusCode::BAD_REQUEST, "El nombre no es correcto").into_response();
        }
        Json(partidas_sorted_by_winner(&state, |_| true)).into_response()
    }

    async fn matches_won_by(
        State(state): State<Arc<FakeState>>,
        Query(params): Query<HashMap<String, String>>,
    ) -> Response {
        state.requests.fetch_add(1, Ordering::SeqCst);
        let Some(apodo) = params.get("apodo") else {
            return (StatusCode::BAD_REQUEST, "El apodo no es correcto").into_response();
        };
        let apodo = Value::from(apodo.as_str());
        Json(partidas_sorted_by_winner(&state, |p| p.get("ganador") == Some(&apodo))).into_response()
    }
}
