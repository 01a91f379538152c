//! Read, validate and write records of one entity type.

use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::{Value, json};

use crate::api::mapper::{self, ReadOnlyPolicy, RecordMapper, WriteMode};
use crate::domain::repositories::{ReferenceChecker, Repository};
use crate::error::{AppError, FieldErrors};

/// Service tying a record mapper to its repository.
///
/// Reads are projected into the mapper's representation. Writes are
/// validated in full, including reference existence, before anything is
/// persisted; a rejected submission never reaches the repository.
pub struct RecordService<M: RecordMapper, R: Repository<M>> {
    repository: Arc<R>,
    references: Arc<dyn ReferenceChecker>,
    policy: ReadOnlyPolicy,
    _mapper: PhantomData<fn() -> M>,
}

impl<M: RecordMapper, R: Repository<M>> RecordService<M, R> {
    pub fn new(
        repository: Arc<R>,
        references: Arc<dyn ReferenceChecker>,
        policy: ReadOnlyPolicy,
    ) -> Self {
        Self {
            repository,
            references,
            policy,
            _mapper: PhantomData,
        }
    }

    /// Fetches one record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    pub async fn get(&self, id: i64) -> Result<M::Representation, AppError> {
        let record = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found::<M>(id))?;

        Ok(mapper::to_representation::<M>(record))
    }

    /// Lists all records ordered by id.
    pub async fn list(&self) -> Result<Vec<M::Representation>, AppError> {
        let records = self.repository.list().await?;
        Ok(records
            .into_iter()
            .map(mapper::to_representation::<M>)
            .collect())
    }

    /// Runs the full validation of a submission without persisting it.
    ///
    /// Reference fields holding a well-formed id are looked up even when
    /// other fields failed, so that one pass reports every problem.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with field-keyed details.
    pub async fn validate(&self, payload: &Value, mode: WriteMode) -> Result<M::Fields, AppError> {
        let checked = mapper::validate::<M>(payload, mode, self.policy);

        let mut errors = match &checked {
            Ok(_) => FieldErrors::new(),
            Err(errors) => errors.clone(),
        };

        for (field, relation, id) in mapper::submitted_references::<M>(payload) {
            if errors.contains(field) {
                continue;
            }
            if !self.references.exists(relation, id).await? {
                errors.add(field, format!("Invalid pk \"{id}\" - object does not exist."));
            }
        }

        match checked {
            Ok(fields) if errors.is_empty() => Ok(fields),
            _ => {
                tracing::debug!(
                    entity = M::NAME,
                    ?mode,
                    fields = ?errors.fields().collect::<Vec<_>>(),
                    "Submission rejected"
                );
                Err(AppError::invalid(errors))
            }
        }
    }

    /// Validates and persists a new record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the submission is rejected.
    /// Returns [`AppError::Conflict`] on unique constraint violations.
    pub async fn create(&self, payload: &Value) -> Result<M::Representation, AppError> {
        let fields = self.validate(payload, WriteMode::Create).await?;
        let record = self.repository.insert(fields).await?;

        tracing::info!(entity = M::NAME, id = M::record_id(&record), "Record created");

        Ok(mapper::to_representation::<M>(record))
    }

    /// Validates and applies a submission to an existing record.
    ///
    /// With `partial` only the submitted fields are written and required
    /// fields may be omitted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id, before any
    /// validation takes place.
    /// Returns [`AppError::Validation`] if the submission is rejected.
    pub async fn update(
        &self,
        id: i64,
        payload: &Value,
        partial: bool,
    ) -> Result<M::Representation, AppError> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(not_found::<M>(id));
        }

        let mode = if partial {
            WriteMode::Partial
        } else {
            WriteMode::Replace
        };
        let fields = self.validate(payload, mode).await?;

        let record = self
            .repository
            .update(id, fields)
            .await?
            .ok_or_else(|| not_found::<M>(id))?;

        tracing::info!(entity = M::NAME, id, partial, "Record updated");

        Ok(mapper::to_representation::<M>(record))
    }

    /// Deletes a record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found::<M>(id));
        }

        tracing::info!(entity = M::NAME, id, "Record deleted");
        Ok(())
    }
}

fn not_found<M: RecordMapper>(id: i64) -> AppError {
    AppError::not_found(
        format!("No {} matches the given query.", M::NAME),
        json!({ "entity": M::NAME, "id": id }),
    )
}
