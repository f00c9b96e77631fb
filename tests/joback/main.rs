mod chemical_records;
mod invariance;
mod properties;
