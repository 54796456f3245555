//! [`ActorEntity`] implementation for [`OrderSession`].

use super::actions::{PlacedOrder, SessionAction, SessionActionResult};
use super::{SessionContext, SessionError};
use crate::framework::ActorEntity;
use crate::model::{OrderSession, OrderSessionCreate, SessionId};
use crate::receipt::build_receipt;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl ActorEntity for OrderSession {
    type Id = SessionId;
    type Create = OrderSessionCreate;
    type Action = SessionAction;
    type ActionResult = SessionActionResult;
    type Context = SessionContext;
    type Error = SessionError;

    fn from_create_params(id: SessionId, params: OrderSessionCreate) -> Result<Self, SessionError> {
        Ok(Self::new(id, params.user_name))
    }

    async fn handle_action(
        &mut self,
        action: SessionAction,
        ctx: &SessionContext,
    ) -> Result<SessionActionResult, SessionError> {
        match action {
            SessionAction::ToggleSelection(item) => {
                let selected = self.toggle(item, &ctx.catalog)?;
                debug!(session_id = %self.id, %item, selected, "Selection toggled");
                Ok(SessionActionResult::Toggled { item, selected })
            }
            SessionAction::PlaceOrder => {
                let (order_id, total) =
                    self.place(|| ctx.order_ids.next_id(), &ctx.catalog, ctx.empty_orders)?;
                info!(session_id = %self.id, %order_id, %total, "Order placed");

                // The session is Placed from here on; a failed write only gets logged.
                let receipt = build_receipt(&*self, self.user_name.as_deref())?;
                let persistence = ctx.receipts.persist(&receipt);
                Ok(SessionActionResult::Placed(PlacedOrder {
                    order_id,
                    receipt,
                    persistence,
                }))
            }
            SessionAction::ResetOrder => {
                self.reset();
                debug!(session_id = %self.id, "Order reset");
                Ok(SessionActionResult::Reset)
            }
            SessionAction::TotalAmount => {
                let total = self.total_amount(&ctx.catalog)?;
                Ok(SessionActionResult::Total(total))
            }
        }
    }
}
