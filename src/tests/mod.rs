mod test_cron_schedule;
mod test_lock;
mod test_registry;
mod test_store;
mod test_trigger;
