mod calc;
mod interactive;
mod shapes;
