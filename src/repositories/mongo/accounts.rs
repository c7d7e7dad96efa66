//! 사용자와 리프레시 토큰 컬렉션

use async_trait::async_trait;
use mongodb::{
    bson::{doc, DateTime},
    options::{FindOneAndUpdateOptions, ReturnDocument},
};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::{RefreshToken, User};
use crate::repositories::{tokens::RefreshTokenRepository, users::UserRepository};
use super::{is_duplicate_key, map_mongo_error, MongoUnitOfWork, REFRESH_TOKENS, USERS};

#[async_trait]
impl UserRepository for MongoUnitOfWork {
    async fn insert_user(&mut self, user: &User) -> AppResult<()> {
        self.collection::<User>(USERS)
            .insert_one(user)
            .session(&mut self.session)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::EmailTaken
                } else {
                    map_mongo_error(e)
                }
            })?;
        Ok(())
    }

    async fn find_active_user_by_email(&mut self, email: &str) -> AppResult<Option<User>> {
        self.collection::<User>(USERS)
            .find_one(doc! { "email": email, "is_active": true, "deleted_at": null })
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)
    }

    async fn find_active_user(&mut self, user_id: &str) -> AppResult<Option<User>> {
        self.collection::<User>(USERS)
            .find_one(doc! { "_id": user_id, "is_active": true, "deleted_at": null })
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)
    }

    async fn save_user(&mut self, user: &User) -> AppResult<()> {
        self.collection::<User>(USERS)
            .replace_one(doc! { "_id": user.id.as_str() }, user)
            .session(&mut self.session)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::EmailTaken
                } else {
                    map_mongo_error(e)
                }
            })?;
        Ok(())
    }
}

#[async_trait]
impl RefreshTokenRepository for MongoUnitOfWork {
    async fn insert_refresh_token(&mut self, token: &RefreshToken) -> AppResult<()> {
        self.collection::<RefreshToken>(REFRESH_TOKENS)
            .insert_one(token)
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)?;
        Ok(())
    }

    async fn find_refresh_token_for_update(&mut self, token_hash: &str) -> AppResult<Option<RefreshToken>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection::<RefreshToken>(REFRESH_TOKENS)
            .find_one_and_update(
                doc! { "token_hash": token_hash },
                doc! { "$set": { "locked_at": DateTime::now() } },
            )
            .with_options(options)
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)
    }

    async fn delete_refresh_token(&mut self, token_hash: &str) -> AppResult<bool> {
        let result = self
            .collection::<RefreshToken>(REFRESH_TOKENS)
            .delete_one(doc! { "token_hash": token_hash })
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)?;
        Ok(result.deleted_count > 0)
    }

    async fn delete_refresh_tokens_for_user(&mut self, user_id: &str) -> AppResult<u64> {
        let result = self
            .collection::<RefreshToken>(REFRESH_TOKENS)
            .delete_many(doc! { "user_id": user_id })
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)?;
        Ok(result.deleted_count)
    }
}
