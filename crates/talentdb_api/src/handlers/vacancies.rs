//! Vacancy endpoints.

use crate::envelope::Deleted;
use crate::error::ApiResult;
use crate::handlers::{new_id, now_rfc3339, require, ApiContext};
use crate::request::{to_partial, CreateVacancy, ListQuery, UpdateVacancy};
use talentdb_core::{CoreError, Entity, Page, Vacancy};

impl ApiContext {
    /// `GET /api/vacancies` - seeded listing in index order.
    pub fn list_vacancies(&self, query: &ListQuery) -> ApiResult<Page<Vacancy>> {
        let store = self.vacancies();
        store.ensure_seed()?;
        self.list_page(&store, query)
    }

    /// `POST /api/vacancies`.
    pub fn create_vacancy(&self, request: CreateVacancy) -> ApiResult<Vacancy> {
        require(&request.title, "Title and department are required")?;
        require(&request.department, "Title and department are required")?;

        let vacancy = Vacancy {
            id: new_id(),
            title: request.title,
            department: request.department,
            status: request.status,
            priority: request.priority,
            created_at: now_rfc3339(),
            candidates: Vec::new(),
        };
        Ok(self.vacancies().create(vacancy)?)
    }

    /// `GET /api/vacancies/:id`.
    pub fn get_vacancy(&self, id: &str) -> ApiResult<Vacancy> {
        Ok(self.vacancies().get(id)?)
    }

    /// `PUT`/`PATCH /api/vacancies/:id` - partial update.
    pub fn update_vacancy(&self, id: &str, request: &UpdateVacancy) -> ApiResult<Vacancy> {
        let partial = to_partial(request)?;
        Ok(self.vacancies().patch(id, &partial)?)
    }

    /// `DELETE /api/vacancies/:id` - 404 when nothing existed.
    pub fn delete_vacancy(&self, id: &str) -> ApiResult<Deleted> {
        if !self.vacancies().delete(id)? {
            return Err(CoreError::not_found(Vacancy::KIND, id).into());
        }
        Ok(Deleted { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use std::sync::Arc;
    use talentdb_core::{Priority, VacancyStatus};
    use talentdb_storage::InMemoryBackend;

    fn ctx() -> ApiContext {
        ApiContext::new(Arc::new(InMemoryBackend::new()))
    }

    fn create_request(title: &str, department: &str) -> CreateVacancy {
        CreateVacancy {
            title: title.into(),
            department: department.into(),
            status: VacancyStatus::Open,
            priority: Priority::Medium,
        }
    }

    #[test]
    fn listing_seeds_first() {
        let ctx = ctx();
        let page = ctx.list_vacancies(&ListQuery::default()).unwrap();
        assert_eq!(page.items.len(), 6);
        assert_eq!(page.items[0].id, "vac1");
    }

    #[test]
    fn create_starts_with_no_candidates() {
        let ctx = ctx();
        let created = ctx
            .create_vacancy(create_request("QA Engineer", "Engineering"))
            .unwrap();
        assert!(created.candidates.is_empty());
        assert!(!created.id.is_empty());
        assert_eq!(ctx.get_vacancy(&created.id).unwrap(), created);
    }

    #[test]
    fn create_requires_title_and_department() {
        let ctx = ctx();
        let err = ctx
            .create_vacancy(create_request("", "Engineering"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        let err = ctx
            .create_vacancy(create_request("QA Engineer", "  "))
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn status_only_patch_keeps_other_fields() {
        let ctx = ctx();
        let created = ctx
            .create_vacancy(create_request("QA Engineer", "Engineering"))
            .unwrap();

        let update = UpdateVacancy {
            status: Some(VacancyStatus::Closed),
            ..UpdateVacancy::default()
        };
        let updated = ctx.update_vacancy(&created.id, &update).unwrap();

        assert_eq!(updated.status, VacancyStatus::Closed);
        assert_eq!(updated.title, "QA Engineer");
        assert_eq!(updated.department, "Engineering");
        assert_eq!(updated.priority, Priority::Medium);
        assert_eq!(updated.candidates, created.candidates);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[test]
    fn update_absent_vacancy_is_404() {
        let ctx = ctx();
        let err = ctx
            .update_vacancy("missing", &UpdateVacancy::default())
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn delete_maps_absence_to_404() {
        let ctx = ctx();
        let created = ctx
            .create_vacancy(create_request("QA Engineer", "Engineering"))
            .unwrap();

        let deleted = ctx.delete_vacancy(&created.id).unwrap();
        assert_eq!(deleted.id, created.id);

        let err = ctx.delete_vacancy(&created.id).unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn two_vacancy_pagination() {
        let ctx = ctx();
        ctx.create_vacancy(create_request("First", "Engineering"))
            .unwrap();
        ctx.create_vacancy(create_request("Second", "Design"))
            .unwrap();

        let first = ctx
            .list_vacancies(&ListQuery {
                cursor: None,
                limit: Some(1),
            })
            .unwrap();
        assert_eq!(first.items.len(), 1);
        assert!(first.next_cursor.is_some());
    }
}
