mod profile_record;
mod wire_format;
