pub use super::book::Entity as Book;
pub use super::category::Entity as Category;
pub use super::cook::Entity as Cook;
pub use super::editor::Entity as Editor;
pub use super::employee::Entity as Employee;
pub use super::ingredient::Entity as Ingredient;
pub use super::recipe::Entity as Recipe;
pub use super::recipe_book::Entity as RecipeBook;
pub use super::recipe_ingredient::Entity as RecipeIngredient;
pub use super::restaurant::Entity as Restaurant;
pub use super::taster::Entity as Taster;
pub use super::tasting_test::Entity as TastingTest;
