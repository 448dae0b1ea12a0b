use chrono::Utc;
use sea_orm::ActiveValue::Set;

use crate::domain::project::entities::Project;
use crate::entity::projects::{ActiveModel as ProjectActiveModel, Model as ProjectModel};

impl From<ProjectModel> for Project {
    fn from(model: ProjectModel) -> Self {
        Project {
            id: model.id,
            company_id: model.company_id,
            customer_id: model.customer_id,
            name: model.name,
            project_number: model.project_number,
            address: model.address,
            status: model.status,
            budget: model.budget,
            start_date: model.start_date,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<Project> for ProjectActiveModel {
    fn from(project: Project) -> Self {
        ProjectActiveModel {
            id: Set(project.id),
            company_id: Set(project.company_id),
            customer_id: Set(project.customer_id),
            name: Set(project.name),
            project_number: Set(project.project_number),
            address: Set(project.address),
            status: Set(project.status),
            budget: Set(project.budget),
            start_date: Set(project.start_date),
            created_at: Set(project.created_at.fixed_offset()),
            updated_at: Set(project.updated_at.fixed_offset()),
        }
    }
}
