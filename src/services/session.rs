//! Query session facade: cache check, remote execution, unwrap, trace.
//!
//! Every operation follows one skeleton. Preview short-circuits execution
//! and caching but still renders and traces the script. Otherwise the
//! request's identifying fields are fingerprinted, the cache consulted,
//! and only on a miss is the script built and run through the executor.
//! The generated script text reaches the trace sink on every path.

use futures::StreamExt;
use std::sync::Arc;
use tracing::debug;

use crate::adapters::cache::{CachedValue, ResultCache};
use crate::domain::errors::QueryResult;
use crate::domain::models::{
    coerce_scalar, Fingerprint, QueryOptions, QueryOutcome, Record, SkippedRecord,
};
use crate::domain::ports::{RemoteExecutor, ScriptTrace};
use crate::services::script_builder;

/// Facade over the configuration/management subsystem of one managed
/// endpoint.
///
/// A session owns the shared collaborators of a logical connection: the
/// remote executor, the trace sink, the result cache, and an immutable
/// default [`QueryOptions`] snapshot. All operations take `&self`; the
/// cache is safe under concurrent callers, and per-call overrides travel
/// as explicit [`QueryOptions`] values instead of mutable session state.
///
/// One session per remote target, alive for the duration of the logical
/// connection. Higher-level wrappers for specific managed objects are
/// expected to share it.
pub struct CimSession {
    executor: Arc<dyn RemoteExecutor>,
    trace: Arc<dyn ScriptTrace>,
    cache: ResultCache,
    defaults: QueryOptions,
}

impl CimSession {
    /// Session with default options (30s TTL, execution enabled).
    pub fn new(executor: Arc<dyn RemoteExecutor>, trace: Arc<dyn ScriptTrace>) -> Self {
        Self::with_options(executor, trace, QueryOptions::default())
    }

    /// Session with a custom default options snapshot.
    pub fn with_options(
        executor: Arc<dyn RemoteExecutor>,
        trace: Arc<dyn ScriptTrace>,
        defaults: QueryOptions,
    ) -> Self {
        Self {
            executor,
            trace,
            cache: ResultCache::new(),
            defaults,
        }
    }

    /// The session's default options snapshot.
    pub const fn defaults(&self) -> &QueryOptions {
        &self.defaults
    }

    /// Read a property off a namespaced object instance.
    ///
    /// Returns an empty string when the remote side produced nothing; only
    /// a failure of the execution channel itself is an error.
    pub async fn get_property(&self, object_path: &str, member: &str) -> QueryResult<String> {
        let options = self.defaults.clone();
        self.get_property_with(object_path, member, &options).await
    }

    /// [`Self::get_property`] with an explicit options snapshot.
    pub async fn get_property_with(
        &self,
        object_path: &str,
        member: &str,
        options: &QueryOptions,
    ) -> QueryResult<String> {
        let member = script_builder::normalize_member(member);
        let script = script_builder::property_read(object_path, &member);

        if options.preview {
            self.trace.script(&script);
            return Ok(String::new());
        }

        let key = Fingerprint::of(&[object_path, &member]);
        let value = self.fetch_scalar(key, &script, options).await?;
        self.trace.script(&script);
        Ok(value)
    }

    /// Invoke a method on a class reference and read a member off the
    /// invocation result.
    ///
    /// `method_call` is the literal call text, parentheses included
    /// (for example `GetAssignedSite()`).
    pub async fn invoke_class_method(
        &self,
        class_path: &str,
        method_call: &str,
        result_member: &str,
    ) -> QueryResult<String> {
        let options = self.defaults.clone();
        self.invoke_class_method_with(class_path, method_call, result_member, &options)
            .await
    }

    /// [`Self::invoke_class_method`] with an explicit options snapshot.
    pub async fn invoke_class_method_with(
        &self,
        class_path: &str,
        method_call: &str,
        result_member: &str,
        options: &QueryOptions,
    ) -> QueryResult<String> {
        let member = script_builder::normalize_member(result_member);
        let script = script_builder::class_method_read(class_path, method_call, &member);

        if options.preview {
            self.trace.script(&script);
            return Ok(String::new());
        }

        let key = Fingerprint::of(&[class_path, method_call, &member]);
        let value = self.fetch_scalar(key, &script, options).await?;
        self.trace.script(&script);
        Ok(value)
    }

    /// Assign a literal value to a property and commit it remotely.
    ///
    /// The cache is seeded with the literal (after variable-prefix
    /// stripping) under the same key a subsequent read computes, before
    /// the remote write is dispatched. A failed remote write therefore
    /// leaves the seeded value cached until it expires - a long-standing
    /// asymmetry with the read paths, kept intact.
    pub async fn set_property(
        &self,
        object_path: &str,
        member: &str,
        literal: &str,
    ) -> QueryResult<()> {
        let options = self.defaults.clone();
        self.set_property_with(object_path, member, literal, &options)
            .await
    }

    /// [`Self::set_property`] with an explicit options snapshot.
    pub async fn set_property_with(
        &self,
        object_path: &str,
        member: &str,
        literal: &str,
        options: &QueryOptions,
    ) -> QueryResult<()> {
        let script = script_builder::property_write(object_path, member, literal);

        if options.preview {
            self.trace.script(&script);
            return Ok(());
        }

        let normalized = script_builder::normalize_member(member);
        let key = Fingerprint::of(&[object_path, &normalized]);
        let cached_literal = script_builder::strip_variable_prefix(literal);
        self.cache
            .put(
                key,
                CachedValue::Scalar(cached_literal.to_string()),
                options.cache_ttl,
            )
            .await;

        let mut records = self.executor.run(&script).await?;
        let mut index = 0usize;
        while let Some(record) = records.next().await {
            match coerce_scalar(&record) {
                Ok(status) => {
                    debug!(fingerprint = %key, %status, "property write acknowledged");
                    break;
                }
                Err(err) => {
                    self.trace.error(&format!("record {index} skipped: {err}"));
                }
            }
            index += 1;
        }

        self.trace.script(&script);
        Ok(())
    }

    /// Run a WQL query against a namespace and collect every matching
    /// instance.
    ///
    /// Records that fail to coerce are skipped, reported through the trace
    /// sink, and listed in the outcome's diagnostics; they never abort the
    /// enumeration. Outcomes served from cache carry an empty skip list.
    pub async fn query(&self, namespace: &str, wql: &str) -> QueryResult<QueryOutcome> {
        let options = self.defaults.clone();
        self.query_with(namespace, wql, &options).await
    }

    /// [`Self::query`] with an explicit options snapshot.
    pub async fn query_with(
        &self,
        namespace: &str,
        wql: &str,
        options: &QueryOptions,
    ) -> QueryResult<QueryOutcome> {
        let script = script_builder::instance_query(namespace, wql);

        if options.preview {
            self.trace.script(&script);
            return Ok(QueryOutcome::default());
        }

        let key = Fingerprint::of(&[namespace, wql]);
        let outcome = self.fetch_records(key, &script, options).await?;
        self.trace.script(&script);
        Ok(outcome)
    }

    /// Run a raw script and return the first scalar record, memoized under
    /// the script text itself.
    pub async fn run_script(&self, script: &str) -> QueryResult<String> {
        let options = self.defaults.clone();
        self.run_script_with(script, &options).await
    }

    /// [`Self::run_script`] with an explicit options snapshot.
    pub async fn run_script_with(
        &self,
        script: &str,
        options: &QueryOptions,
    ) -> QueryResult<String> {
        if options.preview {
            self.trace.script(script);
            return Ok(String::new());
        }

        let key = Fingerprint::of(&[script]);
        let value = self.fetch_scalar(key, script, options).await?;
        self.trace.script(script);
        Ok(value)
    }

    /// Run a raw script and collect every instance record, memoized under
    /// the script text itself.
    pub async fn run_script_records(&self, script: &str) -> QueryResult<QueryOutcome> {
        let options = self.defaults.clone();
        self.run_script_records_with(script, &options).await
    }

    /// [`Self::run_script_records`] with an explicit options snapshot.
    pub async fn run_script_records_with(
        &self,
        script: &str,
        options: &QueryOptions,
    ) -> QueryResult<QueryOutcome> {
        if options.preview {
            self.trace.script(script);
            return Ok(QueryOutcome::default());
        }

        let key = Fingerprint::of(&[script]);
        let outcome = self.fetch_records(key, script, options).await?;
        self.trace.script(script);
        Ok(outcome)
    }

    /// Drop every cached result for this session.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }

    /// Cache-or-execute for scalar-shaped operations.
    ///
    /// The first record that coerces to a string wins and is cached; the
    /// rest of the stream is not consumed. An empty stream (or one with
    /// nothing coercible) yields an empty string and caches nothing, so
    /// the next call asks again.
    async fn fetch_scalar(
        &self,
        key: Fingerprint,
        script: &str,
        options: &QueryOptions,
    ) -> QueryResult<String> {
        if !options.refresh {
            if let Some(CachedValue::Scalar(cached)) = self.cache.get(&key).await {
                debug!(fingerprint = %key, "scalar served from cache");
                return Ok(cached);
            }
        }

        let mut records = self.executor.run(script).await?;
        let mut index = 0usize;
        while let Some(record) = records.next().await {
            match coerce_scalar(&record) {
                Ok(value) => {
                    self.cache
                        .put(key, CachedValue::Scalar(value.clone()), options.cache_ttl)
                        .await;
                    debug!(fingerprint = %key, executor = self.executor.name(), "scalar fetched");
                    return Ok(value);
                }
                Err(err) => {
                    self.trace.error(&format!("record {index} skipped: {err}"));
                }
            }
            index += 1;
        }

        Ok(String::new())
    }

    /// Cache-or-execute for enumeration-shaped operations.
    ///
    /// The stream is consumed in full; the list (empty included) is cached
    /// once, after consumption, as one shared copy.
    async fn fetch_records(
        &self,
        key: Fingerprint,
        script: &str,
        options: &QueryOptions,
    ) -> QueryResult<QueryOutcome> {
        if !options.refresh {
            if let Some(CachedValue::Records(cached)) = self.cache.get(&key).await {
                debug!(fingerprint = %key, records = cached.len(), "enumeration served from cache");
                return Ok(QueryOutcome {
                    records: cached.to_vec(),
                    skipped: Vec::new(),
                });
            }
        }

        let mut stream = self.executor.run(script).await?;
        let mut records = Vec::new();
        let mut skipped = Vec::new();
        let mut index = 0usize;
        while let Some(raw) = stream.next().await {
            match Record::from_value(raw) {
                Ok(record) => records.push(record),
                Err(err) => {
                    let reason = err.to_string();
                    self.trace.error(&format!("record {index} skipped: {reason}"));
                    skipped.push(SkippedRecord { index, reason });
                }
            }
            index += 1;
        }

        let shared: Arc<[Record]> = records.into();
        self.cache
            .put(key, CachedValue::Records(Arc::clone(&shared)), options.cache_ttl)
            .await;
        debug!(
            fingerprint = %key,
            records = shared.len(),
            skipped = skipped.len(),
            executor = self.executor.name(),
            "enumeration fetched"
        );

        Ok(QueryOutcome {
            records: shared.to_vec(),
            skipped,
        })
    }
}
