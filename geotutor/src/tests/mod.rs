

mod hints;
