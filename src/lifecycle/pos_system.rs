use crate::clients::{KitchenClient, MenuClient, OrderClient};
use crate::config::PosConfig;
use crate::controller::OrderController;
use crate::order_actor::LedgerContext;
use actor_framework::ActorClient;
use tracing::{error, info};

/// The runtime orchestrator: starts the catalog and ledger actors, wires the
/// clients and controller on top of them, and shuts everything down.
///
/// # Example
///
/// ```rust
/// use kitchen_pos::lifecycle::PosSystem;
/// use kitchen_pos::model::{CreateOrderRequest, LineItemRequest, MenuItemCreate};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = PosSystem::new();
///     let fries = system
///         .menu_client
///         .create_item(MenuItemCreate::new("Sides", "Fries", 399))
///         .await?;
///
///     let order = system
///         .controller
///         .create_order(CreateOrderRequest {
///             items: vec![LineItemRequest::new(fries.id, 2)],
///             tip_cents: 0,
///         })
///         .await?;
///     assert_eq!(order.subtotal_cents, 798);
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct PosSystem {
    /// Catalog administration and price lookups
    pub menu_client: MenuClient,

    /// Direct ledger access
    pub order_client: OrderClient,

    /// Kitchen board
    pub kitchen_client: KitchenClient,

    /// Boundary operations with input normalization
    pub controller: OrderController,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl PosSystem {
    /// Starts a system with [`PosConfig::default`].
    pub fn new() -> Self {
        Self::with_config(PosConfig::default())
    }

    /// Spawns both actors and wires the clients.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn with_config(config: PosConfig) -> Self {
        info!(tax_rate = %config.tax_rate, buffer = config.actor_buffer, "Starting POS system");

        // 1. Create actors
        let (menu_actor, menu_client) = crate::menu_actor::new(config.actor_buffer);
        let (order_actor, order_client) = crate::order_actor::new(config.actor_buffer);

        // 2. Start actors with injected context
        let menu_handle = tokio::spawn(menu_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(LedgerContext::new(config.tax_rate)));

        // 3. Kitchen view shares the ledger actor
        let kitchen_client = KitchenClient::new(order_client.inner().clone());
        let controller = OrderController::new(
            menu_client.clone(),
            order_client.clone(),
            kitchen_client.clone(),
            config.default_list_limit,
            config.max_list_limit,
        );

        Self {
            menu_client,
            order_client,
            kitchen_client,
            controller,
            handles: vec![menu_handle, order_handle],
        }
    }

    /// Drops every client, then waits for each actor to drain and exit.
    ///
    /// Clones of the clients held elsewhere keep their actor alive, so this
    /// only returns once those are dropped too.
    ///
    /// # Errors
    /// Returns `Err` if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.controller);
        drop(self.kitchen_client);
        drop(self.order_client);
        drop(self.menu_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for PosSystem {
    fn default() -> Self {
        Self::new()
    }
}
