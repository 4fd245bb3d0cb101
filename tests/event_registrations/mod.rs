mod delete;
mod update_status;
