//! Typed wrappers for the tenant-admin REST endpoints.
//!
//! Every page in the tenant console talks to the backend through these
//! instead of ad-hoc fetches, so the URL layout, auth header, response
//! envelope, and error classification live in one place.

use marquee_core::editor::ThemeDraft;
use marquee_core::event::{
    validate_ticket_type, validate_ticket_type_update, CreateTicketType, Event, TicketType,
    UpdateEventTheme, UpdateTicketType,
};
use marquee_core::theme::template::PurchasedTheme;
use marquee_core::theme::ThemeTemplate;
use marquee_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::auth::AuthContext;
use crate::config::ClientConfig;
use crate::error::{classify_response, ClientError, ClientResult};
use crate::response::DataResponse;
use crate::save_gate::SaveGate;

/// HTTP client for the tenant-admin API surface.
pub struct TenantAdminApi {
    client: reqwest::Client,
    base_url: String,
}

impl TenantAdminApi {
    /// Build a client from configuration. Applies the configured request
    /// timeout to every call.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self::with_client(client, config.base_url.clone()))
    }

    /// Build from an existing [`reqwest::Client`] (useful for pooling one
    /// client across API surfaces).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    // ---- events ----

    /// `GET /tenant-admin/events/:id`
    pub async fn get_event(&self, auth: &AuthContext, event_id: DbId) -> ClientResult<Event> {
        let request = self
            .client
            .get(self.url(&format!("tenant-admin/events/{event_id}")));
        let response = auth.apply(request).send().await?;
        Self::parse(response).await
    }

    /// `PUT /tenant-admin/events/:id`
    ///
    /// Full-object replace semantics per field supplied; see
    /// [`UpdateEventTheme`].
    pub async fn update_event_theme(
        &self,
        auth: &AuthContext,
        event_id: DbId,
        payload: &UpdateEventTheme,
    ) -> ClientResult<Event> {
        let request = self
            .client
            .put(self.url(&format!("tenant-admin/events/{event_id}")))
            .header("x-request-id", uuid::Uuid::new_v4().to_string())
            .json(payload);
        let response = auth.apply(request).send().await?;
        Self::parse(response).await
    }

    /// Persist an editor draft as a whole-object replace.
    ///
    /// The gate keeps the triggering control disabled while the save is
    /// in flight and re-enables it when this returns, success or failure.
    /// The draft is taken by reference: a failed save leaves it intact
    /// for retry, never partially applied.
    pub async fn save_theme_draft(
        &self,
        auth: &AuthContext,
        gate: &SaveGate,
        draft: &ThemeDraft,
    ) -> ClientResult<Event> {
        let _guard = gate.begin()?;
        let event_id = draft.event_id();

        tracing::info!(
            event_id,
            theme_id = ?draft.theme_id(),
            "Saving theme draft",
        );

        let result = self
            .update_event_theme(auth, event_id, &draft.save_payload())
            .await;

        match &result {
            Ok(event) => {
                tracing::info!(event_id = event.id, "Theme draft saved");
            }
            Err(err) => {
                tracing::error!(event_id, error = %err, "Theme draft save failed");
            }
        }
        result
    }

    // ---- theme catalogs ----

    /// `GET /tenant-admin/themes/available`
    ///
    /// Templates the tenant may adopt: owned plus free. Editors build
    /// their pickers from this list so an unentitled `themeId` never
    /// reaches a save.
    pub async fn list_available_themes(
        &self,
        auth: &AuthContext,
    ) -> ClientResult<Vec<ThemeTemplate>> {
        let request = self.client.get(self.url("tenant-admin/themes/available"));
        let response = auth.apply(request).send().await?;
        Self::parse(response).await
    }

    /// `GET /tenant-admin/themes/purchased`
    pub async fn list_purchased_themes(
        &self,
        auth: &AuthContext,
    ) -> ClientResult<Vec<PurchasedTheme>> {
        let request = self.client.get(self.url("tenant-admin/themes/purchased"));
        let response = auth.apply(request).send().await?;
        Self::parse(response).await
    }

    // ---- ticket inventory ----

    /// `POST /tenant-admin/ticket-types`
    ///
    /// Validates the payload before it leaves the editor; a malformed
    /// price or quantity blocks the save with a
    /// [`CoreError::Validation`](marquee_core::CoreError::Validation)
    /// instead of a backend round-trip.
    pub async fn create_ticket_type(
        &self,
        auth: &AuthContext,
        input: &CreateTicketType,
    ) -> ClientResult<TicketType> {
        validate_ticket_type(&input.name, input.price, input.quantity)?;

        let request = self
            .client
            .post(self.url("tenant-admin/ticket-types"))
            .json(input);
        let response = auth.apply(request).send().await?;
        let ticket: TicketType = Self::parse(response).await?;

        tracing::info!(
            ticket_type_id = ticket.id,
            event_id = ticket.event_id,
            name = %ticket.name,
            "Ticket type created",
        );
        Ok(ticket)
    }

    /// `PUT /tenant-admin/ticket-types/:id`
    pub async fn update_ticket_type(
        &self,
        auth: &AuthContext,
        ticket_type_id: DbId,
        input: &UpdateTicketType,
    ) -> ClientResult<TicketType> {
        validate_ticket_type_update(input)?;

        let request = self
            .client
            .put(self.url(&format!("tenant-admin/ticket-types/{ticket_type_id}")))
            .json(input);
        let response = auth.apply(request).send().await?;
        Self::parse(response).await
    }

    /// `DELETE /tenant-admin/ticket-types/:id`
    ///
    /// Destructive; UIs confirm with the operator before calling. The
    /// screen reconciles via
    /// [`TicketInventory::apply_deleted`](marquee_core::editor::TicketInventory::apply_deleted)
    /// rather than re-fetching the event, so an unsaved theme draft next
    /// to the inventory survives.
    pub async fn delete_ticket_type(
        &self,
        auth: &AuthContext,
        ticket_type_id: DbId,
    ) -> ClientResult<()> {
        let request = self
            .client
            .delete(self.url(&format!("tenant-admin/ticket-types/{ticket_type_id}")));
        let response = auth.apply(request).send().await?;
        Self::check(response).await?;

        tracing::info!(ticket_type_id, "Ticket type deleted");
        Ok(())
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Ensure a success status and unwrap the `{ "data": ... }` envelope.
    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::ensure_success(response).await?;
        let envelope: DataResponse<T> = response.json().await?;
        Ok(envelope.data)
    }

    /// Ensure a success status, discarding the body.
    async fn check(response: reqwest::Response) -> ClientResult<()> {
        Self::ensure_success(response).await.map(|_| ())
    }

    async fn ensure_success(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            let err = classify_response(status.as_u16(), &body);
            tracing::error!(status = status.as_u16(), error = %err, "API request failed");
            return Err(err);
        }
        Ok(response)
    }
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
