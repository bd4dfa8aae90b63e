use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::blockchain::{Block, Engine, Transaction};
use crate::error::InputError;

/// Body of POST /transactions/new. All three fields are required; they are
/// optional here so absence is reported as an input rejection rather than a
/// deserialization failure.
#[derive(Debug, Deserialize)]
pub struct TransactionRequest {
    sender: Option<String>,
    recipient: Option<String>,
    amount: Option<u64>,
}

impl TransactionRequest {
    fn into_parts(self) -> Result<(String, String, u64), InputError> {
        let sender = self.sender.ok_or(InputError::MissingField("sender"))?;
        let recipient = self.recipient.ok_or(InputError::MissingField("recipient"))?;
        let amount = self.amount.ok_or(InputError::MissingField("amount"))?;
        Ok((sender, recipient, amount))
    }
}

#[derive(Serialize)]
struct MineResponse {
    message: String,
    index: u64,
    transactions: Vec<Transaction>,
    proof: u64,
    previous_hash: String,
}

#[derive(Serialize)]
struct TransactionResponse {
    message: String,
}

#[derive(Serialize)]
struct ChainResponse {
    chain: Vec<Block>,
    length: usize,
}

pub async fn alive() -> impl Responder {
    HttpResponse::Ok().body("Node alive")
}

// GET /mine : run one mine cycle and return the committed block
pub async fn mine(engine: web::Data<Engine>) -> impl Responder {
    let worker = engine.clone();
    // The proof search is CPU-bound; keep it off the async executor.
    match web::block(move || worker.mine()).await {
        Ok(block) => HttpResponse::Ok().json(MineResponse {
            message: "New block forged".to_string(),
            index: block.index,
            transactions: block.transactions,
            proof: block.proof,
            previous_hash: block.previous_hash,
        }),
        Err(err) => HttpResponse::InternalServerError().body(err.to_string()),
    }
}

// POST /transactions/new : queue a transaction for the next block
pub async fn new_transaction(
    engine: web::Data<Engine>,
    request: web::Json<TransactionRequest>,
) -> impl Responder {
    match request.into_inner().into_parts() {
        Ok((sender, recipient, amount)) => {
            let index = engine.submit(sender, recipient, amount);
            HttpResponse::Created().json(TransactionResponse {
                message: format!("Transaction will be added to block {index}"),
            })
        }
        Err(err) => {
            warn!(%err, "rejected transaction submission");
            HttpResponse::BadRequest().body(err.to_string())
        }
    }
}

// GET /chain : the full committed chain and its length
pub async fn full_chain(engine: web::Data<Engine>) -> impl Responder {
    let chain = engine.chain_snapshot();
    let length = chain.len();
    HttpResponse::Ok().json(ChainResponse { chain, length })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/mine", web::get().to(mine))
        .route("/transactions/new", web::post().to(new_transaction))
        .route("/chain", web::get().to(full_chain))
        .route("/alive", web::get().to(alive));
}

/// Start serving the given engine on `address`, blocking until shutdown.
pub async fn run_server(engine: Engine, address: &str) -> std::io::Result<()> {
    let engine = web::Data::new(engine);
    info!(%address, node_id = engine.node_id(), "starting pocketchain node");

    HttpServer::new(move || {
        App::new()
            .app_data(engine.clone())
            .configure(configure_routes)
    })
    .bind(address)?
    .run()
    .await
}
