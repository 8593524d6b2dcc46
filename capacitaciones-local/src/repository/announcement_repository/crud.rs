use async_trait::async_trait;
use capacitaciones_db::models::announcement::AnnouncementModel;
use capacitaciones_db::repository::{Create, Delete, FindByKey, LoadAll, SaveAll, Update};
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::AnnouncementRepositoryImpl;

#[async_trait]
impl LoadAll for AnnouncementRepositoryImpl {
    type Model = AnnouncementModel;

    async fn load_all(&self) -> Result<Vec<AnnouncementModel>, Box<dyn Error + Send + Sync>> {
        self.read_announcements().await
    }
}

#[async_trait]
impl SaveAll for AnnouncementRepositoryImpl {
    type Model = AnnouncementModel;

    async fn save_all(
        &self,
        items: Vec<AnnouncementModel>,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.write_announcements(&items).await
    }
}

#[async_trait]
impl FindByKey for AnnouncementRepositoryImpl {
    type Model = AnnouncementModel;

    async fn find_by_key(
        &self,
        id: &Uuid,
    ) -> Result<Option<AnnouncementModel>, Box<dyn Error + Send + Sync>> {
        Ok(self
            .read_announcements()
            .await?
            .into_iter()
            .find(|a| a.id == *id))
    }
}

#[async_trait]
impl Create for AnnouncementRepositoryImpl {
    type Model = AnnouncementModel;

    async fn create(
        &self,
        item: AnnouncementModel,
    ) -> Result<AnnouncementModel, Box<dyn Error + Send + Sync>> {
        let mut announcements = self.read_announcements().await?;
        announcements.push(item.clone());
        self.write_announcements(&announcements).await?;
        Ok(item)
    }
}

#[async_trait]
impl Update for AnnouncementRepositoryImpl {
    type Model = AnnouncementModel;

    async fn update(
        &self,
        item: AnnouncementModel,
    ) -> Result<AnnouncementModel, Box<dyn Error + Send + Sync>> {
        let mut announcements = self.read_announcements().await?;
        match announcements.iter_mut().find(|a| a.id == item.id) {
            Some(slot) => *slot = item.clone(),
            None => return Err(format!("no announcement with id {}", item.id).into()),
        }
        self.write_announcements(&announcements).await?;
        Ok(item)
    }
}

#[async_trait]
impl Delete for AnnouncementRepositoryImpl {
    type Model = AnnouncementModel;

    async fn delete(&self, id: &Uuid) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let mut announcements = self.read_announcements().await?;
        let before = announcements.len();
        announcements.retain(|a| a.id != *id);
        if announcements.len() == before {
            return Ok(false);
        }
        self.write_announcements(&announcements).await?;
        Ok(true)
    }
}
