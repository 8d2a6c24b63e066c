mod loading;
mod logging;
mod structural;
