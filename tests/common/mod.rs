//! Shared fixtures for integration tests.

use route_introspect::{Layer, RouterBuilder};

/// The banking backend's stack, registered in code.
pub fn banking_app() -> Vec<Layer> {
    let auth = RouterBuilder::new()
        .post("/login")
        .post("/logout")
        .get("/checkAuth");

    let users = RouterBuilder::new()
        .get("/")
        .get("/search")
        .get("/:userId")
        .post("/")
        .patch("/:userId");

    let bank_accounts = RouterBuilder::new()
        .get("/")
        .post("/")
        .delete("/:bankAccountId");

    let transactions = RouterBuilder::new()
        .get("/")
        .get("/public")
        .post("/")
        .patch("/:transactionId");

    RouterBuilder::new()
        .middleware("cors")
        .middleware("logger")
        .middleware("session")
        .middleware("paginate")
        .mount("/", auth)
        .mount("/users", users)
        .mount("/bankAccounts", bank_accounts)
        .mount("/transactions", transactions)
        .middleware("serveStatic")
        .build()
}

/// Expected signatures for [`banking_app`], in registration order.
#[allow(dead_code)]
pub const BANKING_ROUTES: &[&str] = &[
    "POST /login",
    "POST /logout",
    "GET /checkAuth",
    "GET /users/",
    "GET /users/search",
    "GET /users/:userId",
    "POST /users/",
    "PATCH /users/:userId",
    "GET /bankAccounts/",
    "POST /bankAccounts/",
    "DELETE /bankAccounts/:bankAccountId",
    "GET /transactions/",
    "GET /transactions/public",
    "POST /transactions/",
    "PATCH /transactions/:transactionId",
];
