mod add;
mod fields;
mod interop;
mod until;
