use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};

use lightning_common::{Credentials, DashboardSnapshot, LiveMatch, SpellSlotGrid};

use super::{DataBackend, ops};
use crate::bridge::{Invoker, decode_result};
use crate::environment::HostEnvironment;
use crate::error::{ClientError, ClientResult};

/// Backend that forwards every call to the native host
pub struct NativeBackend {
    invoker: Arc<dyn Invoker>,
}

impl NativeBackend {
    pub fn new(invoker: Arc<dyn Invoker>) -> Self {
        Self { invoker }
    }
}

#[async_trait]
impl DataBackend for NativeBackend {
    fn environment(&self) -> HostEnvironment {
        HostEnvironment::Native
    }

    async fn current_summoner(&self) -> ClientResult<String> {
        let value = self.invoker.invoke(ops::GET_CURRENT_SUMMONER, Value::Null).await?;
        let name: Option<String> = decode_result(ops::GET_CURRENT_SUMMONER, value)?;
        Ok(name.unwrap_or_default())
    }

    async fn dashboard(&self, summoner_name: &str) -> ClientResult<DashboardSnapshot> {
        let value = self
            .invoker
            .invoke(ops::GET_DASHBOARD_DATA, json!({ "summonerName": summoner_name }))
            .await?;
        decode_result(ops::GET_DASHBOARD_DATA, value)
    }

    async fn load_credentials(&self) -> ClientResult<Credentials> {
        let value = self.invoker.invoke(ops::LOAD_CREDENTIALS, Value::Null).await?;
        // Nothing stored yet is answered with null
        let pair: Option<(String, String)> = decode_result(ops::LOAD_CREDENTIALS, value)?;
        let (client_id, client_secret) = pair.unwrap_or_default();
        Ok(Credentials::new(client_id, client_secret))
    }

    async fn save_credentials(&self, credentials: &Credentials) -> ClientResult<()> {
        self.invoker
            .invoke(
                ops::SAVE_CREDENTIALS,
                json!({
                    "clientId": credentials.client_id,
                    "clientSecret": credentials.client_secret,
                }),
            )
            .await?;
        Ok(())
    }

    async fn summoner_spells(&self) -> ClientResult<SpellSlotGrid> {
        let value = self.invoker.invoke(ops::GET_SUMMONER_SPELLS, Value::Null).await?;
        let grid: SpellSlotGrid =
            decode_result::<Option<_>>(ops::GET_SUMMONER_SPELLS, value)?.unwrap_or_default();
        if grid.len() > SpellSlotGrid::MAX_ROWS {
            return Err(ClientError::Decode {
                operation: ops::GET_SUMMONER_SPELLS.to_string(),
                message: format!(
                    "{} rows, at most {} allowed",
                    grid.len(),
                    SpellSlotGrid::MAX_ROWS
                ),
            });
        }
        Ok(grid)
    }

    async fn current_match(&self) -> ClientResult<Option<LiveMatch>> {
        let value = self.invoker.invoke(ops::GET_CURRENT_MATCH_DATA, Value::Null).await?;
        decode_result(ops::GET_CURRENT_MATCH_DATA, value)
    }

    async fn image_path(&self, subfolder: &str, name: &str) -> ClientResult<String> {
        let value = self
            .invoker
            .invoke(ops::GET_IMAGE_PATH, json!({ "subfolder": subfolder, "name": name }))
            .await?;
        decode_result(ops::GET_IMAGE_PATH, value)
    }
}
