pub(crate) mod semi;
