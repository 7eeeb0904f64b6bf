use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use credit_core::{
    storage::{CreditStore, CustomerStore, StoreError, StoreResult},
    RecordSet,
};
use credit_domain::{Credit, CreditId, Customer, CustomerId};
use tracing::debug;
use uuid::Uuid;

const RECORDS_FILE_NAME: &str = "records.json";
const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed JSON record store.
///
/// The whole record set lives in one snapshot file. Each mutation runs
/// against a copy under the store lock, is written to disk, and only then
/// replaces the in-memory tables.
pub struct JsonRecordStore {
    path: PathBuf,
    records: Mutex<RecordSet>,
}

impl JsonRecordStore {
    /// Opens (or creates) the store inside `dir`.
    pub fn open(dir: impl AsRef<Path>) -> StoreResult<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(RECORDS_FILE_NAME);
        let records = if path.exists() {
            load_records(&path)?
        } else {
            RecordSet::new()
        };
        debug!(
            path = %path.display(),
            customers = records.customer_count(),
            credits = records.credit_count(),
            "opened json record store"
        );
        Ok(Self {
            path,
            records: Mutex::new(records),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, RecordSet>> {
        self.records
            .lock()
            .map_err(|_| StoreError::Backend("record store lock poisoned".into()))
    }

    fn read<T>(&self, f: impl FnOnce(&RecordSet) -> T) -> StoreResult<T> {
        let guard = self.lock()?;
        Ok(f(&guard))
    }

    fn mutate<T>(&self, f: impl FnOnce(&mut RecordSet) -> StoreResult<T>) -> StoreResult<T> {
        let mut guard = self.lock()?;
        let mut staged = guard.clone();
        let value = f(&mut staged)?;
        save_records(&self.path, &staged)?;
        *guard = staged;
        Ok(value)
    }
}

impl CustomerStore for JsonRecordStore {
    fn insert(&self, customer: Customer) -> StoreResult<Customer> {
        self.mutate(|records| records.insert_customer(customer))
    }

    fn update(&self, customer: &Customer) -> StoreResult<Customer> {
        self.mutate(|records| records.update_customer(customer))
    }

    fn find(&self, id: CustomerId) -> StoreResult<Option<Customer>> {
        self.read(|records| records.customer(id).cloned())
    }

    fn find_by_cpf(&self, cpf: &str) -> StoreResult<Option<Customer>> {
        self.read(|records| records.customer_by_cpf(cpf).cloned())
    }

    fn delete(&self, id: CustomerId) -> StoreResult<()> {
        self.mutate(|records| records.delete_customer(id))
    }
}

impl CreditStore for JsonRecordStore {
    fn insert(&self, credit: Credit) -> StoreResult<Credit> {
        self.mutate(|records| records.insert_credit(credit))
    }

    fn find(&self, id: CreditId) -> StoreResult<Option<Credit>> {
        self.read(|records| records.credit(id).cloned())
    }

    fn find_by_credit_code(&self, credit_code: Uuid) -> StoreResult<Option<Credit>> {
        self.read(|records| records.credit_by_code(credit_code).cloned())
    }

    fn find_all_by_customer(&self, customer_id: CustomerId) -> StoreResult<Vec<Credit>> {
        self.read(|records| records.credits_for(customer_id))
    }

    fn delete(&self, id: CreditId) -> StoreResult<()> {
        self.mutate(|records| records.delete_credit(id))
    }
}

fn load_records(path: &Path) -> StoreResult<RecordSet> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|err| {
        StoreError::Backend(format!(
            "failed to parse record file `{}`: {}",
            path.display(),
            err
        ))
    })
}

fn save_records(path: &Path, records: &RecordSet) -> StoreResult<()> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|err| StoreError::Backend(err.to_string()))?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
