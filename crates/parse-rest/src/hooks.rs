//! Cloud Code webhooks.
//!
//! These endpoints only answer requests that carry the master key.

use tracing::{debug, instrument};

use parse_core::{HookFunction, Result, TriggerFunction};

use crate::client::Client;
use crate::query::decode_results;
use crate::rest::{HOOK_FUNCTIONS, Request, TRIGGER_FUNCTIONS};

impl Client {
    /// Webhooks registered for cloud functions.
    #[instrument(skip(self))]
    pub async fn hook_functions(&self) -> Result<Vec<HookFunction>> {
        let raw = self
            .rest
            .call(Request::get("HookFunctions", HOOK_FUNCTIONS))
            .await?;
        decode_results(&raw.body)
    }

    /// Webhooks registered for class triggers.
    #[instrument(skip(self))]
    pub async fn trigger_functions(&self) -> Result<Vec<TriggerFunction>> {
        let raw = self
            .rest
            .call(Request::get("TriggerFunctions", TRIGGER_FUNCTIONS))
            .await?;
        decode_results(&raw.body)
    }

    /// Register a trigger webhook and return it as stored.
    #[instrument(skip(self))]
    pub async fn create_trigger_function(&self, trigger: &TriggerFunction) -> Result<TriggerFunction> {
        debug!("Registering trigger");
        self.rest
            .call_json(Request::post("CreateTriggerFunction", TRIGGER_FUNCTIONS).json(trigger)?)
            .await
    }
}
