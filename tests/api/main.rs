mod health_check;
mod register;
