use crate::error::{EntityKind, OrNotFound, ServiceResult};
use crate::validation::{self, Validate};
use ::entity::{
    prelude::{Cook, Restaurant},
    restaurant,
};
use sea_orm::*;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantInput {
    pub name: String,
    pub cook_rg: i64,
}

impl Validate for RestaurantInput {
    fn validate(&self) -> ServiceResult<()> {
        validation::required("restaurant name", &self.name, 100)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantDetails {
    pub id: i32,
    pub name: String,
    pub cook_rg: i64,
    pub cook_name: String,
}

impl RestaurantDetails {
    fn new(restaurant: restaurant::Model, cook_name: String) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            cook_rg: restaurant.cook_rg,
            cook_name,
        }
    }
}

async fn ensure_cook<C>(db: &C, rg: i64) -> ServiceResult<()>
where
    C: ConnectionTrait,
{
    Cook::find_by_id(rg)
        .one(db)
        .await?
        .or_not_found(EntityKind::Cook, rg)?;
    Ok(())
}

async fn find_restaurant<C>(db: &C, id: i32) -> ServiceResult<restaurant::Model>
where
    C: ConnectionTrait,
{
    Restaurant::find_by_id(id)
        .one(db)
        .await?
        .or_not_found(EntityKind::Restaurant, id)
}

fn with_names(
    restaurants: Vec<restaurant::Model>,
    names: &std::collections::HashMap<i64, String>,
) -> ServiceResult<Vec<RestaurantDetails>> {
    restaurants
        .into_iter()
        .map(|restaurant| {
            let cook_name = super::name_of(names, restaurant.cook_rg)?;
            Ok(RestaurantDetails::new(restaurant, cook_name))
        })
        .collect()
}

pub struct RestaurantService;

impl RestaurantService {
    #[instrument(skip(db))]
    pub async fn create(db: &DbConn, input: RestaurantInput) -> ServiceResult<RestaurantDetails> {
        input.validate()?;
        let txn = db.begin().await?;

        ensure_cook(&txn, input.cook_rg).await?;
        let restaurant = restaurant::ActiveModel {
            name: Set(input.name),
            cook_rg: Set(input.cook_rg),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        let cook_name = super::employee_name(&txn, restaurant.cook_rg).await?;

        txn.commit().await?;
        info!(id = restaurant.id, "restaurant created");
        Ok(RestaurantDetails::new(restaurant, cook_name))
    }

    pub async fn list(db: &DbConn) -> ServiceResult<Vec<RestaurantDetails>> {
        let txn = db.begin().await?;
        let restaurants = Restaurant::find()
            .order_by_asc(restaurant::Column::Id)
            .all(&txn)
            .await?;
        let names = super::employee_names(&txn, restaurants.iter().map(|restaurant| restaurant.cook_rg))
            .await?;
        txn.commit().await?;
        with_names(restaurants, &names)
    }

    /// Restaurants run by the cook `cook_rg`, which must exist.
    pub async fn list_by_cook(db: &DbConn, cook_rg: i64) -> ServiceResult<Vec<RestaurantDetails>> {
        let txn = db.begin().await?;
        ensure_cook(&txn, cook_rg).await?;
        let restaurants = Restaurant::find()
            .filter(restaurant::Column::CookRg.eq(cook_rg))
            .order_by_asc(restaurant::Column::Id)
            .all(&txn)
            .await?;
        let cook_name = super::employee_name(&txn, cook_rg).await?;
        txn.commit().await?;

        Ok(restaurants
            .into_iter()
            .map(|restaurant| RestaurantDetails::new(restaurant, cook_name.clone()))
            .collect())
    }

    pub async fn get_by_id(db: &DbConn, id: i32) -> ServiceResult<RestaurantDetails> {
        let txn = db.begin().await?;
        let restaurant = find_restaurant(&txn, id).await?;
        let cook_name = super::employee_name(&txn, restaurant.cook_rg).await?;
        txn.commit().await?;
        Ok(RestaurantDetails::new(restaurant, cook_name))
    }

    #[instrument(skip(db))]
    pub async fn update(
        db: &DbConn,
        id: i32,
        input: RestaurantInput,
    ) -> ServiceResult<RestaurantDetails> {
        input.validate()?;
        let txn = db.begin().await?;

        let existing = find_restaurant(&txn, id).await?;
        ensure_cook(&txn, input.cook_rg).await?;

        let mut restaurant: restaurant::ActiveModel = existing.into();
        restaurant.name = Set(input.name);
        restaurant.cook_rg = Set(input.cook_rg);
        let restaurant = restaurant.update(&txn).await?;
        let cook_name = super::employee_name(&txn, restaurant.cook_rg).await?;

        txn.commit().await?;
        info!(id, "restaurant updated");
        Ok(RestaurantDetails::new(restaurant, cook_name))
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &DbConn, id: i32) -> ServiceResult<()> {
        let txn = db.begin().await?;

        find_restaurant(&txn, id).await?;
        Restaurant::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        info!(id, "restaurant deleted");
        Ok(())
    }
}
