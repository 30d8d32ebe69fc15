use sea_orm::{
    ActiveModelTrait, ActiveValue, DbErr, EntityName, EntityTrait, IdenStatic, Iterable, Value,
};

use crate::{
    domain::{
        error::PasswordError,
        models::{
            field::{FieldValue, SecretField},
            update::{HookContext, Operation, UpdateIntent},
        },
        services::{lifecycle::HookChain, password_service::PasswordHasher},
    },
    usecase::password_interceptor::{PasswordInterceptor, PasswordPolicy},
};

/// A string column of a sea-orm entity, resolved by name.
#[derive(Debug, Clone, Copy)]
pub struct ColumnField<E: EntityTrait> {
    column: E::Column,
}

impl<E: EntityTrait> ColumnField<E> {
    pub fn resolve(name: &str) -> Result<Self, PasswordError> {
        E::Column::iter()
            .find(|column| column.as_str() == name)
            .map(|column| Self { column })
            .ok_or_else(|| PasswordError::UnknownField(name.to_string()))
    }

    pub fn column(&self) -> E::Column {
        self.column
    }
}

impl<A: ActiveModelTrait> SecretField<A> for ColumnField<A::Entity> {
    fn name(&self) -> &str {
        self.column.as_str()
    }

    fn read(&self, record: &A) -> Result<FieldValue, PasswordError> {
        match record.get(self.column) {
            ActiveValue::NotSet => Ok(FieldValue::Absent),
            ActiveValue::Set(value) | ActiveValue::Unchanged(value) => match value {
                Value::String(Some(value)) => Ok(FieldValue::Present(*value)),
                Value::String(None) => Ok(FieldValue::Null),
                _ => Err(PasswordError::FieldType {
                    field: SecretField::<A>::name(self).to_string(),
                }),
            },
        }
    }

    fn write(&self, record: &mut A, value: String) -> Result<(), PasswordError> {
        record.set(self.column, value.into());
        Ok(())
    }
}

impl<H: PasswordHasher> PasswordPolicy<H> {
    /// Bind to the entity column named by `password_field`.
    ///
    /// The interceptor reads and writes the `ActiveModel`; to check a
    /// candidate against a loaded `Model`, pass its column value to
    /// [`PasswordInterceptor::verify_value`].
    pub fn bind_column<E: EntityTrait>(
        &self,
    ) -> Result<PasswordInterceptor<ColumnField<E>, H>, PasswordError> {
        let field = ColumnField::resolve(self.options().password_field())?;
        Ok(self.bind(field))
    }
}

/// sea-orm only writes `Set` columns on update, so every update is a patch
/// of those columns.
pub fn update_intent<A: ActiveModelTrait>(model: &A) -> UpdateIntent {
    UpdateIntent::patch(
        <A::Entity as EntityTrait>::Column::iter()
            .filter(|column| model.get(*column).is_set())
            .map(|column| column.as_str().to_string()),
    )
}

impl<A> HookChain<A>
where
    A: ActiveModelTrait + Send,
{
    /// Run the chain from `ActiveModelBehavior::before_save`. A hook error
    /// becomes `DbErr::Custom`, which aborts the write before any statement
    /// is sent.
    pub async fn before_save(&self, mut model: A, insert: bool) -> Result<A, DbErr> {
        let table = A::Entity::default().table_name().to_string();
        let result = if insert {
            let ctx = HookContext::new(table, Operation::Insert);
            self.before_insert(&mut model, &ctx).await
        } else {
            let intent = update_intent(&model);
            let ctx = HookContext::new(table, Operation::Update);
            self.before_update(&mut model, &intent, &ctx).await
        };

        result.map_err(|e| DbErr::Custom(e.to_string()))?;
        Ok(model)
    }
}
