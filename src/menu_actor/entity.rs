//! Entity trait implementation for the MenuItem domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`MenuItem`] to be managed by the generic [`actor_framework::ResourceActor`].

use super::actions::{MenuAction, MenuQuery, MenuQueryResult};
use super::error::MenuError;
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::collections::HashMap;

const MIN_NAME_CHARS: usize = 2;

fn validated_name(name: &str) -> Result<String, MenuError> {
    let name = name.trim();
    if name.chars().count() < MIN_NAME_CHARS {
        return Err(MenuError::Validation(format!(
            "name must be at least {MIN_NAME_CHARS} characters"
        )));
    }
    Ok(name.to_string())
}

fn validated_category(category: &str) -> Result<String, MenuError> {
    let category = category.trim();
    if category.is_empty() {
        return Err(MenuError::Validation("category is required".into()));
    }
    Ok(category.to_string())
}

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Action = MenuAction;
    type ActionResult = MenuItem;
    type Query = MenuQuery;
    type QueryResult = MenuQueryResult;
    type Context = ();
    type Error = MenuError;

    /// Creates an active item with trimmed name and category.
    fn from_create_params(
        id: MenuItemId,
        params: MenuItemCreate,
        _ctx: &(),
    ) -> Result<Self, MenuError> {
        Ok(Self {
            id,
            name: validated_name(&params.name)?,
            category: validated_category(&params.category)?,
            price_cents: params.price_cents,
            active: true,
        })
    }

    /// Applies a partial update. Nothing changes unless every field is valid.
    async fn on_update(&mut self, update: MenuItemUpdate, _ctx: &()) -> Result<(), MenuError> {
        let name = update.name.as_deref().map(validated_name).transpose()?;
        let category = update
            .category
            .as_deref()
            .map(validated_category)
            .transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(price_cents) = update.price_cents {
            self.price_cents = price_cents;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: MenuAction,
        _ctx: &(),
    ) -> Result<MenuItem, MenuError> {
        match action {
            MenuAction::Deactivate => {
                self.active = false;
                Ok(self.clone())
            }
        }
    }

    fn handle_query(
        store: &HashMap<MenuItemId, Self>,
        query: MenuQuery,
    ) -> Result<MenuQueryResult, MenuError> {
        match query {
            MenuQuery::Active => {
                let mut items: Vec<MenuItem> =
                    store.values().filter(|item| item.active).cloned().collect();
                items.sort_by(|a, b| {
                    (&a.category, &a.name, a.id).cmp(&(&b.category, &b.name, b.id))
                });
                Ok(MenuQueryResult::Active(items))
            }
            MenuQuery::Snapshot(ids) => ids
                .into_iter()
                .map(|id| match store.get(&id) {
                    Some(item) if item.active => Ok((id, item.snapshot())),
                    _ => Err(MenuError::UnknownMenuItem(id)),
                })
                .collect::<Result<_, _>>()
                .map(MenuQueryResult::Snapshot),
        }
    }
}
